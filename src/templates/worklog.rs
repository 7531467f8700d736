/// Marker line written under the date title of every worklog file.
pub const WORKLOG_MARKER: &str = "> Capsy worklog";
