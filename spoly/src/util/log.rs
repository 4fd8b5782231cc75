use log::LevelFilter;

// 0: off, 1: info, 2: debug, 3 or more: trace.
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}
