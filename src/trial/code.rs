use std::fmt;

/// Identifier of one recorded walking session, rendered as
/// `<subject>-<trial>` and used as the file-lookup key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrialCode {
    pub subject: u32,
    pub trial: u32,
}

impl TrialCode {
    pub fn new(subject: u32, trial: u32) -> Self {
        Self { subject, trial }
    }
}

impl fmt::Display for TrialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.subject, self.trial)
    }
}
