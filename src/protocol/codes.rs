//! Result-code label tables.
//!
//! NCPASS reports two independent numeric results per authentication
//! attempt: a validation code (did the request itself pass server-side
//! checks) and an authentication code (did the token check succeed). Both
//! are translated into labels at decode time.

/// Label for an NCPASS validation result code.
pub fn validation_label(code: u16) -> &'static str {
    match code {
        0 => "Validation Successful",
        2 => "Invalid Terminal ID",
        3 => "Invalid Login/Logon Time",
        4 => "Unknown Userid",
        5 => "Validation Successful (with RACF PassTicket)",
        6 => "No Slot Available",
        10 => "Invalid Password",
        20 => "Password Expired",
        30 => "New Password Invalid",
        40 => "PIN Change Required",
        50 => "Other Rejection",
        _ => "Unknown Validation Code",
    }
}

/// Label for an NCPASS authentication result code.
pub fn authentication_label(code: u16) -> &'static str {
    match code {
        0 => "Authentication Successful",
        10 => "Authentication Failed",
        20 => "Registration Failed",
        30 => "Reregistration Failed",
        40 => "PIN Change Failed (unassigned token)",
        41 => "Incorrect Token Type",
        42 => "PIN Change Failed",
        50 => "Authentication Not Checked",
        _ => "Unknown Authentication Code",
    }
}
