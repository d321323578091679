use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::processor::Timestamp2Date;
use crate::store::RecordStore;
use chrono::TimeZone;
use tracing::info;

/// Empty the store's queue, running every record through the processor.
///
/// Records are received one at a time and each is transferred exactly once,
/// in input order, before the next is read.
pub fn run<S: RecordStore, Tz: TimeZone>(
    store: &mut S,
    processor: &Timestamp2Date<Tz>,
) -> Result<CmdResult> {
    let mut reports = Vec::new();

    while let Some(mut record) = store.receive()? {
        let report = processor.process(&mut record);
        store.transfer(record, report.route)?;
        reports.push(report);
    }
    store.flush()?;

    let converted: usize = reports.iter().map(|r| r.converted.len()).sum();
    let missing: usize = reports.iter().map(|r| r.missing.len()).sum();
    info!(
        records = reports.len(),
        converted,
        missing,
        "conversion run finished"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Processed {} record(s), converted {} attribute(s)",
        reports.len(),
        converted
    )));
    if missing > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} configured attribute(s) were absent and skipped",
            missing
        )));
    }
    Ok(result.with_reports(reports))
}
