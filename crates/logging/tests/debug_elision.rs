//! Trace and debug statements vanish entirely from builds that do not compile them.

use std::sync::atomic::{AtomicUsize, Ordering};

use logging::{
    ComponentId, DEBUG_STATEMENTS_COMPILED, LineFormat, MemoryWriter, Registry, SeverityLevel,
    Sink, log_facility,
};

fn trace_registry() -> (Registry, MemoryWriter) {
    let writer = MemoryWriter::new();
    let registry = Registry::with_sink(Sink::with_writer(writer.clone()));
    registry.sink().set_format(LineFormat::bare());
    registry.set_all_levels(SeverityLevel::Trace);
    (registry, writer)
}

#[test]
fn build_setting_matches_debug_assertions_or_feature() {
    assert_eq!(
        DEBUG_STATEMENTS_COMPILED,
        cfg!(debug_assertions) || cfg!(feature = "debug-logs")
    );
}

#[test]
fn verbose_arguments_evaluate_only_when_compiled() {
    let (registry, writer) = trace_registry();
    let logger = registry.logger(ComponentId::Testing);
    let evaluated = AtomicUsize::new(0);
    assert!(logger.is_enabled(SeverityLevel::Trace));

    log_facility!(trace, logger, "t{}", evaluated.fetch_add(1, Ordering::Relaxed));
    log_facility!(debug, logger, "d{}", evaluated.fetch_add(1, Ordering::Relaxed));

    let expected = if DEBUG_STATEMENTS_COMPILED { 2 } else { 0 };
    assert_eq!(evaluated.load(Ordering::Relaxed), expected);
    assert_eq!(writer.lines().len(), expected);
}

#[test]
fn info_and_above_are_never_elided() {
    let (registry, writer) = trace_registry();
    let logger = registry.logger(ComponentId::Testing);

    log_facility!(info, logger, "i");
    log_facility!(warn, logger, "w");
    log_facility!(error, logger, "e");
    log_facility!(fatal, logger, "f");

    assert_eq!(writer.lines().len(), 4);
}

#[test]
fn runtime_entry_points_are_not_elided() {
    let (registry, writer) = trace_registry();
    let logger = registry.logger(ComponentId::Testing);

    logger.log(SeverityLevel::Debug, format_args!("direct"));
    logger.verbose_stream(2).append("stream");

    assert_eq!(
        writer.lines(),
        ["[debug][testing] direct", "[trace][testing] stream"]
    );
}
