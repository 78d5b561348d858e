use crate::error::GaitError;

/// Which foot the channel was strapped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sensor {
    Accelerometer,
    Rotation,
}

impl Sensor {
    pub fn unit_label(self) -> &'static str {
        match self {
            Sensor::Accelerometer => "m/s²",
            Sensor::Rotation => "deg/s",
        }
    }
}

/// Number of columns in the signal table.
pub const N_COLUMNS: usize = 16;

/// Column order of the recording: side (L/R), sensor (A/R), axis (V/X/Y/Z).
/// V is the vector magnitude of the three axes.
const TOKENS: [&str; N_COLUMNS] = [
    "LAV", "LAX", "LAY", "LAZ", "LRV", "LRX", "LRY", "LRZ", "RAV", "RAX", "RAY", "RAZ", "RRV",
    "RRX", "RRY", "RRZ",
];

/// One named measurement stream of the signal table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    token: &'static str,
    pub side: Side,
    pub sensor: Sensor,
    pub column: usize,
}

impl Channel {
    /// Resolve a channel token against the fixed table. Unknown tokens are a
    /// fatal error, raised before any file is touched.
    pub fn parse(name: &str) -> Result<Self, GaitError> {
        let column = TOKENS
            .iter()
            .position(|t| *t == name)
            .ok_or_else(|| GaitError::UnknownChannel(name.to_string()))?;
        let token = TOKENS[column];
        let side = if token.starts_with('L') {
            Side::Left
        } else {
            Side::Right
        };
        let sensor = if token.as_bytes()[1] == b'A' {
            Sensor::Accelerometer
        } else {
            Sensor::Rotation
        };
        Ok(Self {
            token,
            side,
            sensor,
            column,
        })
    }

    /// Parse a comma-separated channel list, e.g. "RAV,RAZ,RRY".
    pub fn parse_list(list: &str) -> Result<Vec<Self>, GaitError> {
        list.split(',').map(|s| Self::parse(s.trim())).collect()
    }

    pub fn token(&self) -> &'static str {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sixteen_tokens_resolve_in_column_order() {
        for (i, token) in TOKENS.iter().enumerate() {
            let ch = Channel::parse(token).expect("table token must parse");
            assert_eq!(ch.column, i, "{token}");
            assert_eq!(ch.token(), *token);
        }
    }

    #[test]
    fn side_and_sensor_come_from_the_token() {
        let ch = Channel::parse("LAZ").unwrap();
        assert_eq!(ch.side, Side::Left);
        assert_eq!(ch.sensor, Sensor::Accelerometer);
        assert_eq!(ch.column, 3);

        let ch = Channel::parse("RRY").unwrap();
        assert_eq!(ch.side, Side::Right);
        assert_eq!(ch.sensor, Sensor::Rotation);
        assert_eq!(ch.column, 14);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = Channel::parse("XAV").unwrap_err();
        assert!(matches!(err, GaitError::UnknownChannel(ref s) if s == "XAV"));
    }

    #[test]
    fn parse_list_accepts_default_selection() {
        let channels = Channel::parse_list("RAV,RAZ,RRY,LAV,LAZ,LRY").unwrap();
        assert_eq!(channels.len(), 6);
        assert_eq!(channels[0].column, 8);
        assert_eq!(channels[5].column, 6);
    }

    #[test]
    fn parse_list_fails_on_first_bad_token() {
        let err = Channel::parse_list("RAV,BOGUS,RRY").unwrap_err();
        assert!(matches!(err, GaitError::UnknownChannel(ref s) if s == "BOGUS"));
    }

    #[test]
    fn unit_labels_per_sensor() {
        assert_eq!(Sensor::Accelerometer.unit_label(), "m/s²");
        assert_eq!(Sensor::Rotation.unit_label(), "deg/s");
    }
}
