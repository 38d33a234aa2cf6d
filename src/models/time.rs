use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unix epoch (1970-01-01 00:00:00 UTC) expressed as an MJD.
const UNIX_EPOCH_MJD: f64 = 40587.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Modified Julian Date representation.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ModifiedJulianDate(qtty::Days);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new(v: f64) -> Self {
        Self(qtty::Days::new(v))
    }

    /// Raw MJD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.value() - UNIX_EPOCH_MJD) * SECONDS_PER_DAY
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / SECONDS_PER_DAY + UNIX_EPOCH_MJD)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = self.to_unix_timestamp();
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        chrono::DateTime::from_timestamp(secs_i64, nanos)
            .unwrap_or_else(|| chrono::DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }

    /// Render as a UTC iCalendar date-time stamp (`YYYYMMDDTHHMMSSZ`).
    pub fn to_ics_stamp(&self) -> String {
        self.to_datetime().format("%Y%m%dT%H%M%SZ").to_string()
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}

impl std::ops::Add<qtty::Days> for ModifiedJulianDate {
    type Output = ModifiedJulianDate;

    fn add(self, rhs: qtty::Days) -> Self::Output {
        ModifiedJulianDate(self.0 + rhs)
    }
}

impl std::ops::Sub for ModifiedJulianDate {
    type Output = qtty::Days;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl std::fmt::Display for ModifiedJulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MJD {}", self.value())
    }
}

// Serde as a bare f64 so windows serialize as plain numbers.
impl Serialize for ModifiedJulianDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for ModifiedJulianDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(ModifiedJulianDate::new)
    }
}

#[cfg(test)]
mod tests {
    use super::ModifiedJulianDate;
    use qtty::Days;

    #[test]
    fn test_mjd_new_and_value() {
        let mjd = ModifiedJulianDate::new(59000.5);
        assert_eq!(mjd.value(), 59000.5);
    }

    #[test]
    fn test_mjd_from_f64() {
        let mjd: ModifiedJulianDate = 58849.0.into();
        assert_eq!(mjd.value(), 58849.0);
    }

    #[test]
    fn test_mjd_ordering() {
        let mjd1 = ModifiedJulianDate::new(50000.0);
        let mjd2 = ModifiedJulianDate::new(51000.0);

        assert!(mjd1 < mjd2);
        assert!(mjd2 > mjd1);
    }

    #[test]
    fn test_mjd_unix_epoch() {
        // MJD 40587.0 corresponds to the Unix epoch (1970-01-01)
        let mjd = ModifiedJulianDate::new(40587.0);
        assert!(mjd.to_unix_timestamp().abs() < 1.0);
    }

    #[test]
    fn test_mjd_unix_roundtrip() {
        let mjd = ModifiedJulianDate::from_unix_timestamp(1_700_000_000.0);
        assert!((mjd.to_unix_timestamp() - 1_700_000_000.0).abs() < 1e-3);
    }

    #[test]
    fn test_mjd_datetime_roundtrip() {
        let dt = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mjd = ModifiedJulianDate::from_datetime(dt);
        let back = mjd.to_datetime();
        assert!((back.timestamp() - dt.timestamp()).abs() <= 1);
    }

    #[test]
    fn test_mjd_add_days() {
        let mjd = ModifiedJulianDate::new(59000.0) + Days::new(1.5);
        assert!((mjd.value() - 59001.5).abs() < 1e-12);
    }

    #[test]
    fn test_mjd_difference() {
        let a = ModifiedJulianDate::new(59001.5);
        let b = ModifiedJulianDate::new(59000.0);
        assert_eq!(a - b, Days::new(1.5));
    }

    #[test]
    fn test_mjd_ics_stamp() {
        // MJD 51544.5 = 2000-01-01 12:00:00 UTC
        let mjd = ModifiedJulianDate::new(51544.5);
        assert_eq!(mjd.to_ics_stamp(), "20000101T120000Z");
    }

    #[test]
    fn test_mjd_serde_as_number() {
        let mjd = ModifiedJulianDate::new(60676.25);
        let json = serde_json::to_string(&mjd).unwrap();
        assert_eq!(json, "60676.25");

        let back: ModifiedJulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mjd);
    }
}
