use log::{debug, warn, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

const LOG_ENV: &str = "RPN_LOG";

mod repl {
    use postfix::Converter;

    pub fn evalexpr(input: &str) {
        match Converter::new(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(conv) => match (conv.rpn().to_infix(), conv.evaluate()) {
                (Ok(infix), Ok(result)) => {
                    println!("{} -> {} = {}", infix, conv.postfix(), result)
                }
                (_, Err(e)) | (Err(e), _) => println!("Eval error: {}", e),
            },
        }
    }
}

fn init_logging() {
    let level = std::env::var(LOG_ENV).ok();
    let filter = level
        .as_deref()
        .map_or(Ok(LevelFilter::Warn), str::parse::<LevelFilter>);
    let bad_level = filter.is_err();
    if let Err(e) = TermLogger::init(
        filter.unwrap_or(LevelFilter::Warn),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {}", e);
    }
    if bad_level {
        warn!("bad {} value {:?}, using warn", LOG_ENV, level.unwrap_or_default());
    }
}

fn main() -> rustyline::Result<()> {
    init_logging();
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input);
        return Ok(());
    }
    let histpath = dirs::home_dir().map(|h| h.join(".rpn_history"));
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    while let Ok(input) = rl.readline(">> ") {
        if input.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(input.as_str())?;
        repl::evalexpr(&input);
    }
    if let Some(path) = &histpath {
        if let Err(e) = rl.save_history(path) {
            debug!("could not save history to {:?}: {}", path, e);
        }
    }
    Ok(())
}
