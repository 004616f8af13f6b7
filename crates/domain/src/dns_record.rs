use crate::DomainError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// DNS record types a GSLB zone can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    // Address and alias records
    A,
    AAAA,
    CNAME,
    DNAME,
    PTR,

    // Records with an embedded priority
    MX,
    SRV,

    // Zone and text records
    NS,
    SOA,
    TXT,
    SPF,

    // Service binding and security records
    NAPTR,
    SVCB,
    HTTPS,
    CAA,
    TLSA,
    SSHFP,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::DNAME => "DNAME",
            RecordType::PTR => "PTR",
            RecordType::MX => "MX",
            RecordType::SRV => "SRV",
            RecordType::NS => "NS",
            RecordType::SOA => "SOA",
            RecordType::TXT => "TXT",
            RecordType::SPF => "SPF",
            RecordType::NAPTR => "NAPTR",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
        }
    }

    /// MX and SRV content starts with a whitespace-delimited priority.
    pub fn carries_priority(&self) -> bool {
        matches!(self, RecordType::MX | RecordType::SRV)
    }

    pub fn all() -> Vec<RecordType> {
        vec![
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::DNAME,
            RecordType::PTR,
            RecordType::MX,
            RecordType::SRV,
            RecordType::NS,
            RecordType::SOA,
            RecordType::TXT,
            RecordType::SPF,
            RecordType::NAPTR,
            RecordType::SVCB,
            RecordType::HTTPS,
            RecordType::CAA,
            RecordType::TLSA,
            RecordType::SSHFP,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "DNAME" => Ok(RecordType::DNAME),
            "PTR" => Ok(RecordType::PTR),
            "MX" => Ok(RecordType::MX),
            "SRV" => Ok(RecordType::SRV),
            "NS" => Ok(RecordType::NS),
            "SOA" => Ok(RecordType::SOA),
            "TXT" => Ok(RecordType::TXT),
            "SPF" => Ok(RecordType::SPF),
            "NAPTR" => Ok(RecordType::NAPTR),
            "SVCB" => Ok(RecordType::SVCB),
            "HTTPS" => Ok(RecordType::HTTPS),
            "CAA" => Ok(RecordType::CAA),
            "TLSA" => Ok(RecordType::TLSA),
            "SSHFP" => Ok(RecordType::SSHFP),
            _ => Err(DomainError::UnknownRecordType(s.to_string())),
        }
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
