//! Protocol discriminants. Each enum mirrors one code byte of the wire
//! format; unknown codes stay as raw numbers and are described through the
//! placeholder path instead of failing the decode.

use serde::Serialize;

/// Remote operating service control, byte 1 of every header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rosctr {
    Job,
    Ack,
    AckData,
    UserData,
    /// Structurally valid but unnamed (0x04..=0x06).
    Other(u8),
}

impl Rosctr {
    pub fn code(self) -> u8 {
        match self {
            Rosctr::Job => 0x01,
            Rosctr::Ack => 0x02,
            Rosctr::AckData => 0x03,
            Rosctr::UserData => 0x07,
            Rosctr::Other(v) => v,
        }
    }

    /// ACK and ACK_DATA carry two extra error bytes in the header.
    pub fn header_len(self) -> usize {
        match self {
            Rosctr::Ack | Rosctr::AckData => 12,
            _ => 10,
        }
    }
}

impl TryFrom<u8> for Rosctr {
    type Error = ();

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x01 => Ok(Rosctr::Job),
            0x02 => Ok(Rosctr::Ack),
            0x03 => Ok(Rosctr::AckData),
            0x07 => Ok(Rosctr::UserData),
            0x04..=0x06 => Ok(Rosctr::Other(v)),
            _ => Err(()),
        }
    }
}

/// Function code of JOB/ACK_DATA parameter blocks.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Function {
    CpuService = 0x00,
    ReadVar = 0x04,
    WriteVar = 0x05,
    RequestDownload = 0x1a,
    DownloadBlock = 0x1b,
    DownloadEnded = 0x1c,
    StartUpload = 0x1d,
    Upload = 0x1e,
    EndUpload = 0x1f,
    PiService = 0x28,
    PlcStop = 0x29,
    SetupCommunication = 0xf0,
}

impl TryFrom<u8> for Function {
    type Error = ();

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x00 => Ok(Function::CpuService),
            0x04 => Ok(Function::ReadVar),
            0x05 => Ok(Function::WriteVar),
            0x1a => Ok(Function::RequestDownload),
            0x1b => Ok(Function::DownloadBlock),
            0x1c => Ok(Function::DownloadEnded),
            0x1d => Ok(Function::StartUpload),
            0x1e => Ok(Function::Upload),
            0x1f => Ok(Function::EndUpload),
            0x28 => Ok(Function::PiService),
            0x29 => Ok(Function::PlcStop),
            0xf0 => Ok(Function::SetupCommunication),
            _ => Err(()),
        }
    }
}

/// Addressing scheme selector inside a variable specification.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyntaxId {
    /// Classic S7-300/-400 any-pointer.
    S7Any = 0x10,
    /// R_ID addressing for PBC.
    PbcRid = 0x13,
    /// Whole-DB-region read used by some HMIs.
    DbRead = 0xb0,
    /// Sinumerik NC addressing.
    Nck = 0x82,
    /// DriveES parameter addressing.
    DriveEsAny = 0xa2,
    /// Symbolic addressing of S7-1200/1500.
    Tia1200 = 0xb2,
}

impl TryFrom<u8> for SyntaxId {
    type Error = ();

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x10 => Ok(SyntaxId::S7Any),
            0x13 => Ok(SyntaxId::PbcRid),
            0xb0 => Ok(SyntaxId::DbRead),
            0x82 => Ok(SyntaxId::Nck),
            0xa2 => Ok(SyntaxId::DriveEsAny),
            0xb2 => Ok(SyntaxId::Tia1200),
            _ => Err(()),
        }
    }
}

/// Memory area of a classic any-pointer address.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Area {
    SysInfo = 0x03,
    SysFlags = 0x05,
    AnaIn = 0x06,
    AnaOut = 0x07,
    DirectPeripheral = 0x80,
    Inputs = 0x81,
    Outputs = 0x82,
    Flags = 0x83,
    DataBlocks = 0x84,
    InstanceDataBlocks = 0x85,
    LocalData = 0x86,
    PriorLocalData = 0x87,
    Counters = 0x1c,
    Timers = 0x1d,
    IecCounters = 0x1e,
    IecTimers = 0x1f,
}

impl Area {
    /// Timer and counter areas address whole cells, not byte.bit positions.
    pub fn is_cell_addressed(self) -> bool {
        matches!(
            self,
            Area::Counters | Area::Timers | Area::IecCounters | Area::IecTimers
        )
    }
}

impl TryFrom<u8> for Area {
    type Error = ();

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x03 => Ok(Area::SysInfo),
            0x05 => Ok(Area::SysFlags),
            0x06 => Ok(Area::AnaIn),
            0x07 => Ok(Area::AnaOut),
            0x80 => Ok(Area::DirectPeripheral),
            0x81 => Ok(Area::Inputs),
            0x82 => Ok(Area::Outputs),
            0x83 => Ok(Area::Flags),
            0x84 => Ok(Area::DataBlocks),
            0x85 => Ok(Area::InstanceDataBlocks),
            0x86 => Ok(Area::LocalData),
            0x87 => Ok(Area::PriorLocalData),
            0x1c => Ok(Area::Counters),
            0x1d => Ok(Area::Timers),
            0x1e => Ok(Area::IecCounters),
            0x1f => Ok(Area::IecTimers),
            _ => Err(()),
        }
    }
}

/// Transport size of a data block item; dictates whether the item length
/// counts bits or bytes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataTransportSize {
    Null = 0x00,
    Bit = 0x03,
    ByteWordDword = 0x04,
    Integer = 0x05,
    DInteger = 0x06,
    Real = 0x07,
    OctetString = 0x09,
}

impl DataTransportSize {
    /// Converts the declared length field into a byte count. NULL,
    /// BYTE/WORD/DWORD and INTEGER declare bits; everything else bytes.
    pub fn len_in_bytes(self, declared: u16) -> usize {
        match self {
            DataTransportSize::Null
            | DataTransportSize::ByteWordDword
            | DataTransportSize::Integer => (usize::from(declared) + 7) / 8,
            _ => usize::from(declared),
        }
    }
}

impl TryFrom<u8> for DataTransportSize {
    type Error = ();

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x00 => Ok(DataTransportSize::Null),
            0x03 => Ok(DataTransportSize::Bit),
            0x04 => Ok(DataTransportSize::ByteWordDword),
            0x05 => Ok(DataTransportSize::Integer),
            0x06 => Ok(DataTransportSize::DInteger),
            0x07 => Ok(DataTransportSize::Real),
            0x09 => Ok(DataTransportSize::OctetString),
            _ => Err(()),
        }
    }
}

/// Per-item return code in ACK_DATA data blocks and USERDATA data heads.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReturnCode {
    Reserved = 0x00,
    HardwareFault = 0x01,
    AccessNotAllowed = 0x03,
    AddressOutOfRange = 0x05,
    TypeNotSupported = 0x06,
    SizeMismatch = 0x07,
    ObjectDoesNotExist = 0x0a,
    Success = 0xff,
}

impl TryFrom<u8> for ReturnCode {
    type Error = ();

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x00 => Ok(ReturnCode::Reserved),
            0x01 => Ok(ReturnCode::HardwareFault),
            0x03 => Ok(ReturnCode::AccessNotAllowed),
            0x05 => Ok(ReturnCode::AddressOutOfRange),
            0x06 => Ok(ReturnCode::TypeNotSupported),
            0x07 => Ok(ReturnCode::SizeMismatch),
            0x0a => Ok(ReturnCode::ObjectDoesNotExist),
            0xff => Ok(ReturnCode::Success),
            _ => Err(()),
        }
    }
}

/// High nibble of the USERDATA type/group byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserDataType {
    Push = 0x0,
    Request = 0x4,
    Response = 0x8,
}

impl TryFrom<u8> for UserDataType {
    type Error = ();

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x0 => Ok(UserDataType::Push),
            0x4 => Ok(UserDataType::Request),
            0x8 => Ok(UserDataType::Response),
            _ => Err(()),
        }
    }
}

/// Low nibble of the USERDATA type/group byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserDataGroup {
    ModeTransition = 0x0,
    Programmer = 0x1,
    Cyclic = 0x2,
    Block = 0x3,
    Cpu = 0x4,
    Security = 0x5,
    Pbc = 0x6,
    Time = 0x7,
    Ncprg = 0xf,
}

impl TryFrom<u8> for UserDataGroup {
    type Error = ();

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x0 => Ok(UserDataGroup::ModeTransition),
            0x1 => Ok(UserDataGroup::Programmer),
            0x2 => Ok(UserDataGroup::Cyclic),
            0x3 => Ok(UserDataGroup::Block),
            0x4 => Ok(UserDataGroup::Cpu),
            0x5 => Ok(UserDataGroup::Security),
            0x6 => Ok(UserDataGroup::Pbc),
            0x7 => Ok(UserDataGroup::Time),
            0xf => Ok(UserDataGroup::Ncprg),
            _ => Err(()),
        }
    }
}
