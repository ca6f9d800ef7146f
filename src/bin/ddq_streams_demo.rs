use std::env;
use std::error::Error;
use std::io::Write;
use std::sync::Arc;

use ddq_streams::{LocalRuntime, OutputStream, StreamConfig, StreamKind};
use tracing_subscriber::EnvFilter;

fn print_usage_and_exit() -> ! {
    eprintln!("Usage:");
    eprintln!("  ddq_streams_demo stdout <message>");
    eprintln!("  ddq_streams_demo buffer <message>");
    eprintln!("  ddq_streams_demo file <path> <message>");
    std::process::exit(1);
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let kind = match args.next() {
        Some(arg) => match StreamKind::parse(&arg) {
            Some(kind) => kind,
            None => return Err(format!("unknown stream kind '{arg}'").into()),
        },
        None => return Err("missing arguments".into()),
    };

    let mut config = StreamConfig::new(kind);
    if kind == StreamKind::File {
        match args.next() {
            Some(path) => config = config.with_path(path),
            None => return Err("file streams require a path".into()),
        }
    }

    let message = match args.next() {
        Some(m) => m,
        None => return Err("missing message argument".into()),
    };

    if args.next().is_some() {
        return Err("too many arguments".into());
    }

    let runtime = Arc::new(LocalRuntime::new());
    let stream = config.build_stream::<LocalRuntime>()?;
    stream.bind_runtime(runtime.clone())?;

    let mut target = stream.foreign_object()?;
    writeln!(target, "{message}")?;
    target.flush()?;

    if let Some(buffer) = stream.as_byte_array() {
        println!("buffer output: {}", buffer.get_output()?);
    }

    tracing::info!(counts = ?runtime.constructions(), "done");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("ddq_streams_demo error: {e}");
        print_usage_and_exit();
    }
}
