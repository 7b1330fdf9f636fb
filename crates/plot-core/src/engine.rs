// File: crates/plot-core/src/engine.rs
// Summary: Writes the compiled script to a temp file and runs the engine binary on it.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command as Process, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::script::{compile, Command};
use crate::tempfiles::TempFiles;
use crate::types::POLL_INTERVAL;

/// `render(config, Command::Plot, output)`.
pub fn plot(config: &PlotConfig, output: impl AsRef<Path>) -> Result<()> {
    render(config, Command::Plot, output)
}

/// `render(config, Command::Splot, output)`.
pub fn splot(config: &PlotConfig, output: impl AsRef<Path>) -> Result<()> {
    render(config, Command::Splot, output)
}

/// Compile, run the engine, and remove every temp file before returning.
pub fn render(config: &PlotConfig, command: Command, output: impl AsRef<Path>) -> Result<()> {
    let mut temps = TempFiles::new();
    render_in(config, command, output, &mut temps)
}

/// Like `render`, but temp files land in a caller-owned registry and live as long as it does.
pub fn render_in(
    config: &PlotConfig,
    command: Command,
    output: impl AsRef<Path>,
    temps: &mut TempFiles,
) -> Result<()> {
    let script = compile(config, command, output.as_ref(), temps)?;
    let script_path = temps.write(&script, ".gp")?;
    run_engine(&config.engine, &script_path, config.timeout)
}

/// Run `<binary> <script>` and wait. Non-zero exit, launch failure and timeout are errors.
pub fn run_engine(binary: &str, script: &Path, timeout: Option<Duration>) -> Result<()> {
    info!(engine = binary, script = %script.display(), "running engine");
    let mut child = Process::new(binary)
        .arg(script)
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| PlotError::EngineLaunch { binary: binary.to_string(), source })?;

    let stderr = collect_stderr(&mut child);
    let status = match timeout {
        None => child.wait()?,
        Some(limit) => wait_with_timeout(&mut child, binary, limit)?,
    };

    if status.success() {
        return Ok(());
    }
    // A panicked reader only loses the message, not the failure.
    let stderr = stderr.join().unwrap_or_default().trim_end().to_string();
    warn!(engine = binary, %status, "engine failed");
    Err(PlotError::EngineFailed { binary: binary.to_string(), status, stderr })
}

fn collect_stderr(child: &mut Child) -> JoinHandle<String> {
    let pipe = child.stderr.take();
    std::thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    })
}

fn wait_with_timeout(child: &mut Child, binary: &str, limit: Duration) -> Result<ExitStatus> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            warn!(engine = binary, ?limit, "engine timed out, killing");
            let _ = child.kill();
            let _ = child.wait();
            return Err(PlotError::EngineTimeout { binary: binary.to_string(), timeout: limit });
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
