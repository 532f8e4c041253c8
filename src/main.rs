use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use cliptriage::{
    ExportOutcome, Ffprobe, PreparedClip, RevisionState, classify_batch, export_record,
    parse_clip_filename, read_clip_list, read_entries_file, write_catalog_csv, write_csv_report,
    write_json_report, write_upload_list,
};

#[derive(Parser)]
#[command(name = "cliptriage")]
#[command(author, version, about = "Clip re-annotation triage pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile annotation results into revision decisions
    Reconcile {
        /// Annotation results file (line-delimited JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV report
        #[arg(long)]
        output_csv: PathBuf,

        /// Output JSON report with extended records
        #[arg(long)]
        output_json: PathBuf,

        /// Directory holding the original clips (duration probe target)
        #[arg(long)]
        clip_dir: PathBuf,

        /// Materialize accepted and trimmed clips into this directory
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Prepare a clip list for annotation-tool upload
    Prepare {
        /// Input clip list, one path per line
        #[arg(short, long)]
        list: PathBuf,

        /// Output CSV catalog (path, camera, label)
        #[arg(long)]
        output_csv: PathBuf,

        /// Output upload list for the annotation tool
        #[arg(long)]
        upload: PathBuf,

        /// Base URL where the media server exposes the clips
        #[arg(long, default_value = "http://vid-gpu6.inf.cs.cmu.edu:9000")]
        media_url: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Reconcile {
            input,
            output_csv,
            output_json,
            clip_dir,
            export_dir,
            verbose,
        } => {
            setup_logging(verbose);
            reconcile(input, output_csv, output_json, clip_dir, export_dir)
        }
        Commands::Prepare {
            list,
            output_csv,
            upload,
            media_url,
            verbose,
        } => {
            setup_logging(verbose);
            prepare(list, output_csv, upload, &media_url)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn reconcile(
    input: PathBuf,
    output_csv: PathBuf,
    output_json: PathBuf,
    clip_dir: PathBuf,
    export_dir: Option<PathBuf>,
) -> Result<()> {
    info!("Loading annotation results from {:?}", input);
    let entries = read_entries_file(&input).context("Failed to parse annotation results")?;
    info!("Loaded {} entries", entries.len());

    let probe = Ffprobe;
    let batch = classify_batch(&entries, &probe, &clip_dir);
    if batch.skipped > 0 {
        warn!(
            "{} entries skipped (malformed filename or probe failure)",
            batch.skipped
        );
    }

    write_csv_report(&batch.records, &output_csv)?;
    info!("CSV report written to {:?}", output_csv);
    write_json_report(&batch.records, &output_json)?;
    info!("JSON report written to {:?}", output_json);

    if let Some(export_dir) = export_dir {
        let mut copied = 0;
        let mut trimmed = 0;
        for record in &batch.records {
            match export_record(record, &clip_dir, &export_dir) {
                Ok(ExportOutcome::Copied) => copied += 1,
                Ok(ExportOutcome::Trimmed(outputs)) => trimmed += outputs,
                Ok(ExportOutcome::Skipped) => {}
                Err(e) => warn!("Export failed for {}: {}", record.filename, e),
            }
        }
        info!(
            "Exported {} copied and {} trimmed clips to {:?}",
            copied, trimmed, export_dir
        );
    }

    for state in [
        RevisionState::Ok,
        RevisionState::Relabel,
        RevisionState::OkTrim,
        RevisionState::RelabelTrim,
        RevisionState::Revisit,
        RevisionState::ShortClip,
    ] {
        let count = batch.records.iter().filter(|r| r.state == state).count();
        info!("{}: {} clips", state.as_str(), count);
    }
    info!("Total clips: {}", batch.records.len());

    Ok(())
}

fn prepare(list: PathBuf, output_csv: PathBuf, upload: PathBuf, media_url: &str) -> Result<()> {
    info!("Loading clip list from {:?}", list);
    let paths = read_clip_list(&list)?;
    info!("Loaded {} clip paths", paths.len());

    let mut clips = Vec::with_capacity(paths.len());
    let mut skipped = 0;
    for path in paths {
        match parse_clip_filename(&path) {
            Ok(parts) => clips.push(PreparedClip {
                path,
                camera_id: parts.camera_id,
                label: parts.original_label,
            }),
            Err(e) => {
                warn!("Skipping {}: {}", path, e);
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        warn!("{} clip paths skipped", skipped);
    }

    write_catalog_csv(&clips, &output_csv)?;
    info!("Catalog written to {:?}", output_csv);
    write_upload_list(&clips, media_url, &upload)?;
    info!("Upload list written to {:?}", upload);
    info!("Total clips: {}", clips.len());

    Ok(())
}
