pub mod classify;
pub mod io;
pub mod media;
pub mod models;
pub mod parse;

pub use classify::{BatchResult, ClassifyError, classify_batch, classify_entry};
pub use io::{
    PreparedClip, csv_line, read_clip_list, read_entries, read_entries_file, write_catalog_csv,
    write_csv_report, write_json_report, write_upload_list,
};
pub use media::{DurationProbe, ExportError, ExportOutcome, Ffprobe, ProbeError, export_record};
pub use models::{Annotation, AnnotationRecord, ClipEntry, RevisionState, TrimSpan};
pub use parse::{
    FilenameError, FilenameParts, format_timecode, format_timecodes, is_timespan,
    parse_clip_filename, parse_timespan,
};
