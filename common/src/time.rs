/// A point in time expressed as milliseconds since the Unix epoch.
///
/// Sample timestamps are stored and compared in this form everywhere;
/// conversion from wall-clock types happens at the edges.
pub type Timestamp = i64;
