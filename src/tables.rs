//! Static code-to-description tables. Lookups never fail: callers fall back
//! to [`unknown8`]/[`unknown16`] placeholders so that an unlisted code
//! degrades the description, never the decode.

/// Placeholder description for an unlisted one-byte code.
pub fn unknown8(code: u8) -> String {
    format!("Unknown (0x{code:02x})")
}

/// Placeholder description for an unlisted two-byte code.
pub fn unknown16(code: u16) -> String {
    format!("Unknown (0x{code:04x})")
}

pub(crate) fn describe8(entry: Option<&'static str>, code: u8) -> String {
    entry.map(str::to_owned).unwrap_or_else(|| unknown8(code))
}

pub(crate) fn describe16(entry: Option<&'static str>, code: u16) -> String {
    entry.map(str::to_owned).unwrap_or_else(|| unknown16(code))
}

pub fn rosctr_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "Job: Request: job with acknowledgement",
        0x02 => "Ack: acknowledgement without additional field",
        0x03 => "Ack_Data: Response: acknowledgement with additional field",
        0x07 => "Userdata",
        _ => return None,
    })
}

pub fn function_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x00 => "CPU services",
        0x04 => "Read Var",
        0x05 => "Write Var",
        0x1a => "Request download",
        0x1b => "Download block",
        0x1c => "Download ended",
        0x1d => "Start upload",
        0x1e => "Upload",
        0x1f => "End upload",
        0x28 => "PI-Service",
        0x29 => "PLC Stop",
        0xf0 => "Setup communication",
        _ => return None,
    })
}

pub fn item_return_value_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x00 => "Reserved",
        0x01 => "Hardware error",
        0x03 => "Accessing the object not allowed",
        0x05 => "Invalid address: the desired address is beyond limit for this PLC",
        0x06 => "Data type not supported",
        0x07 => "Data type inconsistent",
        0x0a => "Object does not exist",
        0xff => "Success",
        _ => return None,
    })
}

pub fn syntax_id_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x10 => "S7ANY: Address data S7-Any pointer-like DB1.DBX10.2",
        0x13 => "PBC-R_ID: R_ID for PBC",
        0x82 => "NCK: Sinumerik NCK HMI access",
        0xa2 => "DRIVEESANY: seen on Drive ES Starter with routing over S7",
        0xb0 => "DBREAD: Kind of DB block read, seen only at an S7-400",
        0xb2 => "1200SYM: Symbolic address mode of S7-1200",
        _ => return None,
    })
}

pub fn area_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x03 => "System info of 200 family",
        0x05 => "System flags of 200 family",
        0x06 => "Analog inputs of 200 family",
        0x07 => "Analog outputs of 200 family",
        0x80 => "Direct peripheral access (P)",
        0x81 => "Inputs (I)",
        0x82 => "Outputs (Q)",
        0x83 => "Flags (M)",
        0x84 => "Data blocks (DB)",
        0x85 => "Instance data blocks (DI)",
        0x86 => "Local data (L)",
        0x87 => "Unknown yet (V)",
        0x1c => "S7 counters (C)",
        0x1d => "S7 timers (T)",
        0x1e => "IEC counters (200 family)",
        0x1f => "IEC timers (200 family)",
        _ => return None,
    })
}

/// Transport size inside a classic variable specification.
pub fn transport_size_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x00 => "NULL",
        0x01 => "BIT",
        0x02 => "BYTE",
        0x03 => "CHAR",
        0x04 => "WORD",
        0x05 => "INT",
        0x06 => "DWORD",
        0x07 => "DINT",
        0x08 => "REAL",
        0x09 => "DATE",
        0x0a => "TOD",
        0x0b => "TIME",
        0x0c => "S5TIME",
        0x0f => "DATE_AND_TIME",
        0x1c => "COUNTER",
        0x1d => "TIMER",
        0x1e => "IEC TIMER",
        0x1f => "IEC COUNTER",
        0x20 => "HS COUNTER",
        _ => return None,
    })
}

/// Transport size in a data block item head.
pub fn data_transport_size_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x00 => "NULL",
        0x03 => "BIT",
        0x04 => "BYTE/WORD/DWORD",
        0x05 => "INTEGER",
        0x06 => "DINTEGER",
        0x07 => "REAL",
        0x09 => "OCTET STRING",
        _ => return None,
    })
}

pub fn userdata_group_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x0 => "Mode transition",
        0x1 => "Programmer commands",
        0x2 => "Cyclic services",
        0x3 => "Block functions",
        0x4 => "CPU functions",
        0x5 => "Security",
        0x6 => "PBC BSEND/BRECV",
        0x7 => "Time functions",
        0xf => "NC programming",
        _ => return None,
    })
}

pub fn userdata_type_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x0 => "Push",
        0x4 => "Request",
        0x8 => "Response",
        _ => return None,
    })
}

pub fn prog_subfunc_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "Request diag data (Type 1)",
        0x02 => "VarTab",
        0x0c => "Erase",
        0x0e => "Read diag data",
        0x0f => "Remove diag data",
        0x10 => "Force",
        0x13 => "Request diag data (Type 2)",
        _ => return None,
    })
}

pub fn cyclic_subfunc_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "Memory",
        0x04 => "Unsubscribe",
        0x05 => "Memory2",
        _ => return None,
    })
}

pub fn block_subfunc_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "List blocks",
        0x02 => "List blocks of type",
        0x03 => "Get block info",
        _ => return None,
    })
}

pub fn cpu_subfunc_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "Read SZL",
        0x02 => "Message service",
        0x03 => "Diagnostic message from PLC",
        0x05 => "ALARM_8 indication",
        0x06 => "NOTIFY indication",
        0x07 => "ALARM_8 lock",
        0x08 => "ALARM_8 unlock",
        0x0b => "Alarm was acknowledged in HMI/SCADA",
        0x0c => "Alarm acknowledge indication from CPU to HMI",
        0x0d => "Alarm lock indication from CPU to HMI",
        0x0e => "Alarm unlock indication from CPU to HMI",
        0x11 => "ALARM_SQ indication",
        0x12 => "ALARM_S indication",
        0x13 => "ALARM query",
        0x16 => "NOTIFY_8 indication",
        _ => return None,
    })
}

pub fn sec_subfunc_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "PLC password",
        _ => return None,
    })
}

pub fn time_subfunc_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "Read clock",
        0x02 => "Set clock",
        0x03 => "Read clock (following)",
        0x04 => "Set clock",
        _ => return None,
    })
}

pub fn weekday_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "Undefined",
        1 => "Sunday",
        2 => "Monday",
        3 => "Tuesday",
        4 => "Wednesday",
        5 => "Thursday",
        6 => "Friday",
        7 => "Saturday",
        _ => return None,
    })
}

pub fn tia1200_lid_flag_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x2 => "Encapsulated LID",
        0x3 => "Encapsulated Index",
        0x4 => "Obtain by LID",
        0x5 => "Obtain by Index",
        0x6 => "Part Start Address",
        0x7 => "Part Length",
        _ => return None,
    })
}

pub fn tia1200_area1_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0x8a0e => "DB: Reading DB, 2 byte DB-Number following",
        0x0000 => "IQMCT: Reading I/Q/M/C/T, 2 Byte detail area following",
        _ => return None,
    })
}

pub fn tia1200_area2_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0x50 => "Inputs (I)",
        0x51 => "Outputs (Q)",
        0x52 => "Flags (M)",
        0x53 => "Counter (C)",
        0x54 => "Timer (T)",
        _ => return None,
    })
}

pub fn nck_area_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "N - NCK",
        1 => "B - Mode group",
        2 => "C - Channel",
        3 => "A - Axis",
        4 => "T - Tool",
        5 => "V - Feed drive",
        6 => "M - Main drive",
        7 => "M - MMC",
        _ => return None,
    })
}

pub fn nck_module_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x10 => "Y - Global system data",
        0x11 => "YNCFL - NCK instruction groups",
        0x12 => "FU - NCU global settable frames",
        0x13 => "FA - Active NCU global frames",
        0x14 => "TO - Tool data",
        0x15 => "RP - Arithmetic parameters",
        0x16 => "SE - Setting data",
        0x17 => "SGUD - SGUD-Block",
        0x18 => "LUD - Local userdata",
        0x19 => "TC - Toolholder parameters",
        0x1a => "M - Machine data",
        0x1c => "WAL - Working area limitation",
        0x1e => "DIAG - Internal diagnostic data",
        0x1f => "CC - Unknown",
        0x20 => "FE - Channel-specific external frame",
        0x21 => "TD - Tool data: General data",
        0x22 => "TS - Tool edge data: Monitoring data",
        0x23 => "TG - Tool data: Grinding-specific data",
        0x24 => "TU - Tool data",
        0x25 => "TUE - Tool edge data, userdefined data",
        0x26 => "TV - Tool data, directory",
        0x27 => "TM - Magazine data: General data",
        0x28 => "TP - Magazine data: Location data",
        0x29 => "TPM - Magazine data: Multiple assignment of location data",
        0x2a => "TT - Magazine data: Location typ",
        0x2b => "TMV - Magazine data: Directory",
        0x2c => "TMC - Magazine data: Configuration data",
        0x2d => "MGUD - MGUD-Block",
        0x2e => "UGUD - UGUD-Block",
        0x2f => "GUD4 - GUD4-Block",
        0x30 => "GUD5 - GUD5-Block",
        0x31 => "GUD6 - GUD6-Block",
        0x32 => "GUD7 - GUD7-Block",
        0x33 => "GUD8 - GUD8-Block",
        0x34 => "GUD9 - GUD9-Block",
        0x35 => "PA - Channel-specific protection zones",
        0x36 => "GD1 - SGUD-Block GD1",
        0x37 => "NIB - State data: Nibbling",
        0x38 => "ETP - Types of events",
        0x39 => "ETPD - Data lists for protocolling",
        0x3a => "SYNACT - Channel-specific synchronous actions",
        0x3b => "DIAGN - Diagnostic data",
        0x3c => "VSYN - Channel-specific user variables for synchronous actions",
        0x3d => "TUS - Tool data: user monitoring data",
        0x3e => "TUM - Tool data: user magazine data",
        0x3f => "TUP - Tool data: user magatine place data",
        0x40 => "TF - Parametrizing, return parameters of _N_TMGETT, _N_TSEARC",
        0x41 => "FB - Channel-specific base frames",
        0x42 => "SSP2 - State data: Spindle",
        0x43 => "PUD - programmglobale Benutzerdaten",
        0x44 => "TOS - Edge-related location-dependent fine total offsets",
        0x45 => "TOST - Edge-related location-dependent fine total offsets, transformed",
        0x46 => "TOE - Edge-related coarse total offsets, setup offsets",
        0x47 => "TOET - Edge-related coarse total offsets, transformed setup offsets",
        0x48 => "AD - Adapter data",
        0x49 => "TOT - Edge data: Transformed offset data",
        0x4a => "AEV - Working offsets: Directory",
        0x4b => "YFAFL - NCK instruction groups (Fanuc)",
        0x4c => "FS - System-Frame",
        0x4d => "SD - Servo data",
        0x4e => "TAD - Application-specific data",
        0x4f => "TAO - Aplication-specific cutting edge data",
        0x50 => "TAS - Application-specific monitoring data",
        0x51 => "TAM - Application-specific magazine data",
        0x52 => "TAP - Application-specific magazine location data",
        0x53 => "MEM - Unknown",
        0x54 => "SALUC - Alarm actions: List in reverse chronological order",
        0x55 => "AUXFU - Auxiliary functions",
        0x56 => "TDC - Tool/Tools",
        0x57 => "CP - Generic coupling",
        0x6e => "SDME - Unknown",
        0x6f => "SPARPI - Program pointer on interruption",
        0x70 => "SEGA - State data: Geometry axes in tool offset memory (extended)",
        0x71 => "SEMA - State data: Machine axes (extended)",
        0x72 => "SSP - State data: Spindle",
        0x73 => "SGA - State data: Geometry axes in tool offset memory",
        0x74 => "SMA - State data: Machine axes",
        0x75 => "SALAL - Alarms: List organized according to time",
        0x76 => "SALAP - Alarms: List organized according to priority",
        0x77 => "SALA - Alarms: List organized according to time",
        0x78 => "SSYNAC - Synchronous actions",
        0x79 => "SPARPF - Program pointers for block search and stop run",
        0x7a => "SPARPP - Program pointer in automatic operation",
        0x7b => "SNCF - Active G functions",
        0x7d => "SPARP - Part program information",
        0x7e => "SINF - Part-program-specific status data",
        0x7f => "S - State data",
        0xfd => "0 - Internal",
        _ => return None,
    })
}

/// PI services keyed by the service name carried on the wire.
pub fn pi_service_description(name: &str) -> Option<&'static str> {
    Some(match name {
        "_INSE" => "Activates a PLC module",
        "_DELE" => "Removes module from the PLC's passive file system",
        "P_PROGRAM" => "PLC Start / Stop",
        "_MODU" => "PLC Copy Ram to Rom",
        "_GARB" => "Compress PLC memory",
        "_N_LOGIN_" => "Login",
        "_N_LOGOUT" => "Logout",
        "_N_CANCEL" => "Cancels NC alarm",
        "_N_DASAVE" => "PI-Service for copying data from SRAM to FLASH",
        "_N_DIGIOF" => "Turns off digitizing",
        "_N_DIGION" => "Turns on digitizing",
        "_N_DZERO_" => "Set all D nos. invalid for function \"unique D no.\"",
        "_N_F_OPER" => "Opens a file read-only",
        "_N_OST_OF" => "Overstore OFF",
        "_N_OST_ON" => "Overstore ON",
        "_N_SCALE_" => "Unit of measurement setting (metric<->INCH)",
        "_N_SETUFR" => "Activates user frame",
        "_N_STRTLK" => "The global start disable is set",
        "_N_STRTUL" => "The global start disable is reset",
        "_N_TMRASS" => "Resets the Active status",
        "_N_F_DELE" => "Deletes file",
        "_N_EXTERN" => "Selects external program for execution",
        "_N_EXTMOD" => "Selects external program for execution",
        "_N_F_DELR" => "Delete file even without access rights",
        "_N_F_XFER" => "Selects file for uploading",
        "_N_LOCKE_" => "Locks the active file for editing",
        "_N_SELECT" => "Selects program for execution",
        "_N_SRTEXT" => "A file is being marked in /_N_EXT_DIR",
        "_N_F_CLOS" => "Closes file",
        "_N_F_OPEN" => "Opens file",
        "_N_F_SEEK" => "Position the file search pointer",
        "_N_ASUP__" => "Assigns interrupt",
        "_N_CHEKDM" => "Start uniqueness check on D numbers",
        "_N_CHKDNO" => "Check whether the tools have unique D numbers",
        "_N_CONFIG" => "Reconfigures machine data",
        "_N_CRCEDN" => "Creates a cutting edge by specifying an edge no.",
        "_N_DELECE" => "Deletes a cutting edge",
        "_N_CREACE" => "Creates a cutting edge",
        "_N_CREATO" => "Creates a tool",
        "_N_DELETO" => "Deletes tool",
        "_N_CRTOCE" => "Generate tool with specified edge number",
        "_N_DELVAR" => "Delete data block",
        "_N_F_COPY" => "Copies file within the NCK",
        "_N_F_DMDA" => "Deletes MDA memory",
        "_N_F_PROT" => "Assigns a protection level to a file",
        "_N_F_RENA" => "Renames file",
        "_N_FINDBL" => "Activates search",
        "_N_IBN_SS" => "Sets the set-up switch",
        "_N_MMCSEM" => "MMC-Semaphore",
        "_N_NCKMOD" => "The mode in which the NCK will work is being set",
        "_N_NEWPWD" => "New password",
        "_N_SEL_BL" => "Selects a new block",
        "_N_SETTST" => "Activate tools for replacement tool group",
        "_N_TMAWCO" => "Set the active wear group in one magazine",
        "_N_TMCRTC" => "Create tool with specified edge number",
        "_N_TMCRTO" => "Creates tool in the tool management",
        "_N_TMFDPL" => "Searches an empty place for loading",
        "_N_TMFPBP" => "Searches for empty location",
        "_N_TMGETT" => "Determines T-number for specific toolID with Duplono",
        "_N_TMMVTL" => "Loads or unloads a tool",
        "_N_TMPCIT" => "Sets increment value of the piece counter",
        "_N_TMPOSM" => "Positions a magazine or tool",
        "_N_TRESMO" => "Reset monitoring values",
        "_N_TSEARC" => "Complex search via search screenforms",
        _ => return None,
    })
}

pub fn msgservice_almtype_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "SCAN_ABORT",
        1 => "SCAN_INITIATE",
        4 => "ALARM_ABORT",
        5 => "ALARM_INITIATE",
        8 => "ALARM_S_ABORT",
        9 => "ALARM_S_INITIATE",
        _ => return None,
    })
}

pub fn modetrans_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "STOP",
        1 => "Warm Restart",
        2 => "RUN",
        3 => "Hot Restart",
        4 => "HOLD",
        6 => "Cold Restart",
        9 => "RUN_R (H-System redundant)",
        11 => "LINK-UP",
        12 => "UPDATE",
        _ => return None,
    })
}

pub fn alarm_querytype_name(code: u8) -> Option<&'static str> {
    Some(match code {
        1 => "ByAlarmtype",
        3 => "ByEventID",
        _ => return None,
    })
}

pub fn alarm_query_alarmtype_name(code: u32) -> Option<&'static str> {
    Some(match code {
        1 => "SCAN",
        2 => "ALARM_8",
        4 => "ALARM_S",
        _ => return None,
    })
}

pub fn diag_eventid_class_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "Standard OB events",
        0x02 => "Synchronous errors",
        0x03 => "Asynchronous errors",
        0x04 => "Mode transitions",
        0x05 => "Run-time events",
        0x06 => "Communication events",
        0x07 => "Events for fail-safe and fault-tolerant systems",
        0x08 => "Standardized diagnostic data on modules",
        0x09 => "Predefined user events",
        0x0a | 0x0b => "Freely definable events",
        0x0c..=0x0e => "Reserved",
        0x0f => "Events for modules other than CPUs",
        _ => return None,
    })
}

/// Fixed diagnostic event descriptions. The full catalogue runs to several
/// hundred entries; this carries the commonly observed ones and lets the
/// rest fall through to the placeholder.
pub fn diag_eventid_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0x113a => "Start request for cyclic interrupt OB with special handling (S7-300 only)",
        0x1155 => "Status alarm for PROFIBUS DP",
        0x1156 => "Update interrupt for PROFIBUS DP",
        0x115a => "Manufacturer interrupt for PROFINET IO",
        0x1381 => "Request for manual warm restart",
        0x1384 => "Request for automatic hot restart",
        0x138b => "Master CPU: request for automatic warm restart",
        0x2521 => "BCD conversion error",
        0x2522 => "Area length error when reading",
        0x2523 => "Area length error when writing",
        0x2524 => "Area error when reading",
        0x2525 => "Area error when writing",
        0x2526 => "Timer number error",
        0x2527 => "Counter number error",
        0x2528 => "Alignment error when reading",
        0x2529 => "Alignment error when writing",
        0x2530 => "Write error when accessing the DB",
        0x2531 => "Write error when accessing the DI",
        0x2532 => "Block number error when opening a DB",
        0x2533 => "Block number error when opening a DI",
        0x2534 => "Block number error when calling an FC",
        0x2535 => "Block number error when calling an FB",
        0x253a => "DB not loaded",
        0x253c => "FC not loaded",
        0x253d => "SFC not loaded",
        0x253e => "FB not loaded",
        0x253f => "SFB not loaded",
        0x2942 => "I/O access error, reading",
        0x2943 => "I/O access error, writing",
        0x3501 => "Cycle time exceeded",
        0x3502 => "User interface (OB or FRB) request error",
        0x3503 => "Delay too long processing a priority class",
        0x350a => "Resume RUN mode after CiR",
        0x3571 => "Nesting depth too high in nesting levels",
        0x3575 => "Nesting depth for block calls (B stack) too high",
        0x3585 => "Error in the PC operating system (only for LC RTX)",
        0x35d2 => "Diagnostic entries cannot be sent at present",
        0x35e3 => "Frame length error in GD",
        0x3821 => "BATTF: failure on all battery submodules of the rack gone",
        0x3823 => "24 volt supply failure on central rack, problem eliminated",
        0x3833 => "24 volt supply failure on at least one expansion rack, problem eliminated",
        0x3842 => "Module OK",
        0x3861 => "Module/interface module inserted, module type OK",
        0x3884 => "Interface module plugged in",
        0x38c5 => "Distributed I/Os: station fault, leaving state",
        0x3921 => "BATTF: failure on at least one backup battery of the central rack",
        0x3931 => "BATTF: failure of at least one backup battery of the expansion rack",
        0x3961 => "Module/interface module removed, cannot be addressed",
        0x39b1 => "I/O access error when updating the process image input table",
        0x39c4 => "Distributed I/Os: station failure, entering state",
        0x39ce => "PROFINET IO station operational again, but error(s) in module parameter assignment",
        0x4300 => "Backed-up power on",
        0x4301 => "Mode transition from STOP to STARTUP",
        0x4302 => "Mode transition from STARTUP to RUN",
        0x4303 => "STOP caused by stop switch being activated",
        0x4304 => "STOP caused by PG STOP operation or SFB 20 STOP",
        0x4309 => "Memory reset started automatically (power on not backed up)",
        0x4319 => "CiR completed",
        0x43d3 => "STOP on standby CPU",
        0x43e2 => "Change from updating to redundant mode",
        0x43e8 => "Standby CPU: change from link-up after startup",
        0x4521 => "DEFECTIVE: failure of instruction processing processor",
        0x4528 => "DEFECTIVE: failure of scan time monitoring",
        0x4542 => "STOP caused by object management system",
        0x4548 => "STOP caused by I/O management",
        0x4563 => "STOP caused by I/O access error (OB not loaded or not possible)",
        0x456d => "STOP caused by program sequence error (OB not loaded or not possible)",
        0x4573 => "STOP caused by exceeding the nesting depth for synchronous errors",
        0x457b => "STOP caused by DB not being loaded on on-board I/Os",
        0x45d6 => "LINK-UP rejected due to mismatched system program of the sub-PLC",
        0x4931 => "STOP or DEFECTIVE: memory test error in memory submodule",
        0x494e => "STOP caused by power failure",
        0x49a2 => "STOP caused by error in parameter modification: startup disabled",
        0x49a8 => "STOP: error indicated by the interface module for the distributed I/Os",
        0x49d2 => "Standby CPU changed to STOP due to STOP on the master CPU during link-up",
        0x5371 => "Distributed I/Os: end of the synchronization with a DP master",
        0x5445 => "Start of System reconfiguration in RUN mode",
        0x558b => "Difference in the firmware version of the configured and inserted CPU",
        0x5960 => "Parameter assignment error when switching",
        0x596a => "PROFINET IO: IP address of an IO device already present",
        0x597c => "DP command Global Control failure or moved",
        0x6390 => "Formatting of Micro Memory Card complete",
        0x6514 => "GD packet number exists twice on the module",
        0x6526 => "Memory reset request due to memory replacement",
        0x652c => "No startup due to illegal OB on submodule",
        0x6537 => "No startup: submodule contains a block with an illegal length",
        0x6545 => "Source language illegal",
        0x6551 => "A block has no CRC",
        0x72a2 => "Failure of a DP master or a DP master system",
        0x7303 => "H system (1 of 2) changed to redundant mode",
        0x7341 => "Synchronization error in user program due to waiting at different synchronization points",
        0x73c1 => "Update process canceled",
        0x74de => "Safety program: Shutdown of the F program disabled",
        0x75d2 => "Safety program error: Cycle time time-out",
        0x75dd => "Safety program: Shutdown of a fail-save runtime group enabled",
        0x7855 => "SYNC module eliminated",
        0x78e5 => "F-I/O device depassivated",
        0x7954 => "SYNC module: rack number assigned twice",
        0x796f => "Redundant I/O: The I/O was globally disabled",
        0x79d4 => "Error in safety relevant communication between F CPUs",
        0x79e7 => "Simulation block (F system block) loaded",
        _ => return None,
    })
}

/// Channel and process diagnostics (event classes 8 and 9), keyed with the
/// entering/leaving and source bits masked off.
pub fn diag_eventid_module_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0x8000 => "Module fault/OK",
        0x8003 => "Channel error",
        0x8007 => "Incorrect parameters in module",
        0x8033 => "Time monitoring responded (watchdog)",
        0x8040 => "Expansion rack failed",
        0x8044 => "ADC/DAC error",
        0x8051 => "Common mode error",
        0x8055 => "Reference channel error",
        0x8061 => "Common mode error",
        0x8066 => "No load voltage",
        0x8073 => "Short circuit to ground (sensor)",
        0x8081 => "Chassis ground fault",
        0x8085 => "Fuse tripped",
        0x80b1 => "Counter module, signal B faulty",
        0x80b5 => "Counter module, 24 V sensor supply faulty",
        0x9004 => "Unit protective command (OPEN/CLOSED)",
        0x9008 => "Manipulated variable monitoring responded",
        0x900c => "Command execution error (sequencer)",
        0x9011 => "Process status OPEN/ON",
        0x9015 => "Process status ON via manual",
        0x9019 => "Process status OFF via protective command",
        0x9032 => "Actuator (DE/WE) limit position not OPEN",
        0x9042 => "Illegal status, tolerance time not elapsed",
        0x9046 => "Final status exited illegally, tolerance time = 0",
        0x9052 => "Lower limit of signal range LSR",
        0x9056 => "Upper tolerance limit UTL",
        0x9060 => "GRAPH7 step entering/leaving",
        0x9064 => "GRAPH7 error acknowledged",
        0x9073 => "Final state exited illegally",
        0x9083 => "Below limit value, tolerance time > 0",
        0x9087 => "Below gradient, tolerance time > 0",
        0x90f2 => "Division by 0",
        _ => return None,
    })
}

/// Block types carried as two ASCII digits in block function payloads.
pub fn block_type_name(ascii: &str) -> Option<&'static str> {
    Some(match ascii {
        "08" => "OB",
        "0A" => "DB",
        "0B" => "SDB",
        "0C" => "FC",
        "0D" => "SFC",
        "0E" => "FB",
        "0F" => "SFB",
        _ => return None,
    })
}

/// Subblock type byte in block info responses.
pub fn subblk_type_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x08 => "OB",
        0x0a => "DB",
        0x0b => "SDB",
        0x0c => "FC",
        0x0d => "SFC",
        0x0e => "FB",
        0x0f => "SFB",
        _ => return None,
    })
}

pub fn block_lang_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "AWL",
        0x02 => "KOP",
        0x03 => "FUP",
        0x04 => "SCL",
        0x05 => "DB",
        0x06 => "GRAPH",
        0x07 => "SDB",
        0x08 => "CPU-DB",
        0x11 => "SDB (after overall reset)",
        0x12 => "SDB (routing)",
        0x29 => "ENCRYPT",
        _ => return None,
    })
}

pub fn block_security_name(code: u32) -> Option<&'static str> {
    Some(match code {
        0 => "None",
        3 => "Know How Protect",
        _ => return None,
    })
}

/// Memory area selectors inside variable table requests.
pub fn vartab_area_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "MB",
        0x02 => "MW",
        0x03 => "MD",
        0x11 => "EB",
        0x12 => "EW",
        0x13 => "ED",
        0x21 => "AB",
        0x22 => "AW",
        0x23 => "AD",
        0x31 => "PEB",
        0x32 => "PEW",
        0x33 => "PED",
        0x51 => "DBB",
        0x52 => "DBW",
        0x53 => "DBD",
        0x54 => "TIMER",
        0x64 => "COUNTER",
        _ => return None,
    })
}
