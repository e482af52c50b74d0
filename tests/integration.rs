//! Integration tests for the Equity Swap Calculator.
//!
//! This test suite drives the public API end to end:
//! - Worked compensation examples
//! - Boundary percentages (0% and 100%)
//! - Settings persistence on disk
//! - Working selection persistence and clamping
//! - Session edits, formatting and audit reports
//! - Configuration-driven store construction
//! - Error cases

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tempfile::tempdir;

use equity_swap_calculator::calculation::{compute, compute_with_audit};
use equity_swap_calculator::config::{AppConfig, ConfigLoader, StorageBackend, StorageConfig};
use equity_swap_calculator::error::EngineError;
use equity_swap_calculator::format::result_lines;
use equity_swap_calculator::models::{
    BoundPart, CompensationSettings, SelectionField, SettingsField, WorkingSelection,
};
use equity_swap_calculator::session::CalculatorSession;
use equity_swap_calculator::store::{
    FileStore, KeyValueStore, SETTINGS_KEY, SelectionLoadPolicy, SettingsStore,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn selection(equity: &str, hours: &str, weeks: &str) -> WorkingSelection {
    WorkingSelection {
        equity_swap_percent: decimal(equity),
        hours_per_week: decimal(hours),
        weeks_per_year: decimal(weeks),
    }
}

fn file_store(path: &Path) -> SettingsStore<FileStore> {
    SettingsStore::new(FileStore::new(path))
}

fn file_session(path: &Path) -> CalculatorSession<FileStore> {
    CalculatorSession::open(file_store(path))
}

// =============================================================================
// SECTION 1: Worked Examples
// =============================================================================

#[test]
fn test_default_bundle_without_swap() {
    let settings = CompensationSettings::default();
    let result = compute(&settings, &selection("0", "21", "43")).unwrap();

    assert_eq!(result.cash_pre_equity, decimal("135450"));
    assert_eq!(result.equity_compensation, Decimal::ZERO);
    assert_eq!(result.cash_compensation, decimal("135450"));
    assert_eq!(result.cash_bonus, Decimal::ZERO);
    assert_eq!(result.number_of_options, Decimal::ZERO);
    assert_eq!(result.total_compensation, decimal("135450"));
}

#[test]
fn test_default_bundle_half_swap() {
    let settings = CompensationSettings::default();
    let result = compute(&settings, &selection("50", "21", "43")).unwrap();

    assert_eq!(result.cash_pre_equity, decimal("135450"));
    assert_eq!(result.equity_compensation, decimal("67725"));
    assert_eq!(result.cash_compensation, decimal("67725"));
    assert_eq!(result.cash_bonus, decimal("25396.875"));
    // 67725 / 11.4 = 5940.789..., rounded half-up
    assert_eq!(result.number_of_options, decimal("5941"));
    assert_eq!(result.total_compensation, decimal("93121.875"));
}

#[test]
fn test_half_swap_display_rows() {
    let settings = CompensationSettings::default();
    let result = compute(&settings, &selection("50", "21", "43")).unwrap();
    let lines = result_lines(&result);

    let rendered: Vec<String> = lines
        .iter()
        .map(|l| format!("{}: {}{}", l.label, l.value, l.suffix))
        .collect();

    assert_eq!(
        rendered,
        vec![
            "Stock Options: 5,941 / year",
            "Cash: $67,725.00 / year",
            "Cash bonus to exercise options: $25,396.88 / year",
            "Total Compensation: $93,121.88 / year",
        ]
    );
}

// =============================================================================
// SECTION 2: Boundary Percentages
// =============================================================================

#[test]
fn test_full_swap_pays_only_bonus() {
    let mut settings = CompensationSettings::default();
    settings.equity_swap.max = decimal("100");
    let result = compute(&settings, &selection("100", "21", "43")).unwrap();

    assert_eq!(result.cash_compensation, Decimal::ZERO);
    assert_eq!(result.equity_compensation, decimal("135450"));
    assert_eq!(result.cash_bonus, decimal("50793.75"));
    assert_eq!(result.total_compensation, result.cash_bonus);
}

#[test]
fn test_identities_hold_across_percentages() {
    let settings = CompensationSettings::default();
    for pct in 0..=80 {
        let result = compute(&settings, &selection(&pct.to_string(), "35", "44")).unwrap();
        assert_eq!(
            result.cash_compensation + result.equity_compensation,
            result.cash_pre_equity,
            "cash split broken at {}%",
            pct
        );
        assert_eq!(
            result.total_compensation,
            result.cash_compensation + result.cash_bonus,
            "total broken at {}%",
            pct
        );
    }
}

// =============================================================================
// SECTION 3: Settings Persistence
// =============================================================================

#[test]
fn test_settings_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator.json");

    let mut store = file_store(&path);
    assert_eq!(store.load(), CompensationSettings::default());

    let settings = CompensationSettings::default()
        .with_field(SettingsField::StockPrice, decimal("12.75"))
        .unwrap()
        .with_field(
            SettingsField::Bound(SelectionField::EquitySwap, BoundPart::Max),
            decimal("90"),
        )
        .unwrap();
    store.save(&settings).unwrap();

    let reopened = file_store(&path);
    assert_eq!(reopened.load(), settings);
}

#[test]
fn test_settings_record_is_numeric_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator.json");

    let mut store = file_store(&path);
    store.save(&CompensationSettings::default()).unwrap();

    let raw = FileStore::new(&path).get(SETTINGS_KEY).unwrap().unwrap();
    let record: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(record.as_object().unwrap().len(), 11);
    assert!(record["stockPrice"].is_number());
    assert_eq!(record["hourlyRate"], serde_json::json!(150));
    assert_eq!(record["defaultWeeksPerYear"], serde_json::json!(43));
}

#[test]
fn test_corrupt_document_loads_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator.json");
    fs::write(&path, "not a document").unwrap();

    let store = file_store(&path);
    let settings = store.load();
    assert_eq!(settings, CompensationSettings::default());
    assert_eq!(
        store.load_working_selection(&settings),
        WorkingSelection::from_defaults(&settings)
    );
}

// =============================================================================
// SECTION 4: Working Selection Persistence
// =============================================================================

#[test]
fn test_selection_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator.json");
    let settings = CompensationSettings::default();

    let mut store = file_store(&path);
    let saved = selection("30", "25", "40");
    store.save_working_selection(&saved).unwrap();

    let reopened = file_store(&path);
    assert_eq!(reopened.load_working_selection(&settings), saved);
}

#[test]
fn test_stale_selection_after_bounds_change() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator.json");

    let mut store = file_store(&path);
    store
        .save_working_selection(&selection("70", "30", "43"))
        .unwrap();

    // Bounds narrowed behind the stored selection's back
    let mut settings = CompensationSettings::default();
    settings.equity_swap.max = decimal("50");
    store.save(&settings).unwrap();

    let clamping = file_store(&path);
    let loaded = clamping.load_working_selection(&clamping.load());
    assert_eq!(loaded.equity_swap_percent, decimal("50"));

    let preserving = SettingsStore::with_policy(FileStore::new(&path), SelectionLoadPolicy::Preserve);
    let loaded = preserving.load_working_selection(&preserving.load());
    assert_eq!(loaded.equity_swap_percent, decimal("70"));
}

// =============================================================================
// SECTION 5: Session Workflow
// =============================================================================

#[test]
fn test_session_edits_survive_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator.json");

    let mut session = file_session(&path);
    session
        .update_setting_from_input(SettingsField::HourlyRate, "$175.00")
        .unwrap();
    session.update_selection_from_input(SelectionField::EquitySwap, "25%");
    session.update_selection_from_input(SelectionField::HoursPerWeek, "30 hours");
    drop(session);

    let reopened = file_session(&path);
    assert_eq!(reopened.settings().hourly_rate, decimal("175"));
    assert_eq!(reopened.selection().equity_swap_percent, decimal("25"));
    assert_eq!(reopened.selection().hours_per_week, decimal("30"));

    let result = reopened.result().unwrap();
    // 175 * 30 * 43
    assert_eq!(result.cash_pre_equity, decimal("225750"));
}

#[test]
fn test_session_narrowing_bounds_moves_selection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator.json");

    let mut session = file_session(&path);
    session.update_selection(SelectionField::WeeksPerYear, decimal("44"));
    session
        .update_setting(
            SettingsField::Bound(SelectionField::WeeksPerYear, BoundPart::Default),
            decimal("40"),
        )
        .unwrap();
    session
        .update_setting(
            SettingsField::Bound(SelectionField::WeeksPerYear, BoundPart::Max),
            decimal("42"),
        )
        .unwrap();

    assert_eq!(session.selection().weeks_per_year, decimal("42"));

    let reopened = file_session(&path);
    assert_eq!(reopened.selection().weeks_per_year, decimal("42"));
    assert_eq!(reopened.settings().weeks_per_year.max, decimal("42"));
}

#[test]
fn test_session_report_matches_result() {
    let dir = tempdir().unwrap();
    let mut session = file_session(&dir.path().join("calculator.json"));
    session.update_selection(SelectionField::EquitySwap, decimal("50"));

    let report = session.report().unwrap();
    assert_eq!(report.result, session.result().unwrap());
    assert_eq!(report.audit_trace.steps.len(), 6);
    assert!(report.audit_trace.warnings.is_empty());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["audit_trace"]["steps"][4]["rule_id"], "number_of_options");
}

// =============================================================================
// SECTION 6: Configuration
// =============================================================================

#[test]
fn test_configured_file_backend() {
    let dir = tempdir().unwrap();
    let data_path = dir.path().join("state").join("calculator.json");
    fs::write(
        dir.path().join("calculator.yaml"),
        format!(
            "storage:\n  backend: file\n  path: {}\nselection_load_policy: preserve\n",
            data_path.display()
        ),
    )
    .unwrap();

    let loader = ConfigLoader::load(dir.path()).unwrap();
    assert_eq!(loader.storage().backend, StorageBackend::File);

    let mut session = CalculatorSession::open(loader.open_store());
    session.update_selection(SelectionField::EquitySwap, decimal("10"));
    assert!(data_path.exists());

    let store = loader.open_store();
    assert_eq!(store.policy(), SelectionLoadPolicy::Preserve);
    assert_eq!(
        store.load_working_selection(&store.load()).equity_swap_percent,
        decimal("10")
    );
}

#[test]
fn test_memory_backend_forgets_on_reopen() {
    let config = AppConfig {
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            ..StorageConfig::default()
        },
        selection_load_policy: SelectionLoadPolicy::Clamp,
    };

    let mut session = CalculatorSession::open(config.open_store());
    session.update_selection(SelectionField::EquitySwap, decimal("10"));

    let fresh = CalculatorSession::open(config.open_store());
    assert_eq!(fresh.selection().equity_swap_percent, Decimal::ZERO);
}

// =============================================================================
// SECTION 7: Error Cases
// =============================================================================

#[test]
fn test_zero_stock_price_is_division_by_zero() {
    let mut settings = CompensationSettings::default();
    settings.stock_price = Decimal::ZERO;

    match compute(&settings, &selection("50", "21", "43")) {
        Err(EngineError::DivisionByZero { operation }) => {
            assert_eq!(operation, "number_of_options");
        }
        other => panic!("Expected DivisionByZero error, got {:?}", other),
    }
    assert!(compute_with_audit(&settings, &selection("50", "21", "43")).is_err());
}

#[test]
fn test_invalid_bounds_edit_leaves_disk_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator.json");

    let mut session = file_session(&path);
    let err = session
        .update_setting(
            SettingsField::Bound(SelectionField::HoursPerWeek, BoundPart::Min),
            decimal("30"),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidBounds { .. }));

    assert!(!path.exists());
    assert_eq!(file_store(&path).load(), CompensationSettings::default());
}

#[test]
fn test_weeks_beyond_a_year_rejected() {
    let dir = tempdir().unwrap();
    let mut session = file_session(&dir.path().join("calculator.json"));
    let err = session
        .update_setting(
            SettingsField::Bound(SelectionField::WeeksPerYear, BoundPart::Max),
            decimal("53"),
        )
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidValue { .. }));
}

#[test]
fn test_missing_config_directory() {
    let dir = tempdir().unwrap();
    let result = ConfigLoader::load(dir.path().join("nowhere"));
    assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
}
