use log::Log;

#[astro_run_test::test]
fn logs_at_every_level() {
  log::info!("Hello, world!");
  log::warn!("Hello, world!");
  log::error!("Hello, world!");
  log::debug!("Hello, world!");
  log::trace!("Hello, world!");
}

fn enabled(level: log::Level) -> bool {
  log::logger().enabled(&log::Metadata::builder().level(level).build())
}

#[astro_run_test::test(debug)]
fn returns_result() -> Result<(), String> {
  log::debug!("Hello, world!");

  assert!(enabled(log::Level::Debug));
  assert!(!enabled(log::Level::Trace));
  Ok(())
}

#[astro_run_test::test(warn)]
fn level_applies_to_own_test() {
  assert!(enabled(log::Level::Warn));
  assert!(!enabled(log::Level::Info));
}

#[astro_run_test::test]
fn defaults_to_trace() {
  assert!(enabled(log::Level::Trace));
  assert_eq!(log::max_level(), log::LevelFilter::Trace);
}

#[astro_run_test::test]
#[should_panic(expected = "boom")]
fn keeps_attributes() {
  panic!("boom");
}
