use log::LevelFilter;

pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> { 
    use simplelog::*;

    let mut cb = simplelog::ConfigBuilder::new();
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

/// `0 => Off, 1 => Info, 2 => Debug, 3.. => Trace`.
pub fn level_for(verbosity: u8) -> LevelFilter { 
    match verbosity { 
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    }
}

pub fn init_logger(verbosity: u8) -> Result<(), log::SetLoggerError> { 
    init_simple_logger(level_for(verbosity))
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn levels() { 
        assert_eq!(level_for(0), LevelFilter::Off);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
