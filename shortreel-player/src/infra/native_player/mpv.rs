//! mpv as an external process, driven over its JSON IPC socket.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Value, json};

use super::{
    LaunchRequest, NativeBackend, NativeError, NativeHandle, NativePlayerConfig,
};

#[cfg(unix)]
use std::io::Write;
#[cfg(unix)]
use std::os::unix::net::UnixStream;

static NEXT_SOCKET: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct MpvBackend {
    command: String,
    extra_args: Vec<String>,
}

impl MpvBackend {
    pub fn new(config: &NativePlayerConfig) -> Self {
        Self {
            command: config.command.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    fn socket_path() -> PathBuf {
        let n = NEXT_SOCKET.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir()
            .join(format!("shortreel-mpv-{}-{n}", std::process::id()))
    }
}

/// Command line for one launch; the URL always comes last.
pub fn launch_args(
    request: &LaunchRequest,
    socket_path: &Path,
    extra_args: &[String],
) -> Vec<String> {
    let mut args = vec![
        format!("--input-ipc-server={}", socket_path.display()),
        "--no-config".to_string(),
        "--force-window=yes".to_string(),
        "--osc=yes".to_string(),
        "--keep-open=no".to_string(),
        format!("--title={}", request.title),
        format!(
            "--pause={}",
            if request.start_paused { "yes" } else { "no" }
        ),
    ];
    args.extend(extra_args.iter().cloned());
    args.push(request.url.clone());
    args
}

/// One newline-terminated IPC command.
fn ipc_line(command: Value, request_id: u64) -> String {
    format!(
        "{}\n",
        json!({
            "command": command,
            "request_id": request_id,
        })
    )
}

impl NativeBackend for MpvBackend {
    fn launch(
        &self,
        request: LaunchRequest,
    ) -> Result<Box<dyn NativeHandle>, NativeError> {
        let socket_path = Self::socket_path();
        let args = launch_args(&request, &socket_path, &self.extra_args);

        log::info!("[Native] Launching {} for {}", self.command, request.url);
        let process = Command::new(&self.command)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| NativeError::Launch {
                command: self.command.clone(),
                reason: err.to_string(),
            })?;

        Ok(Box::new(MpvHandle {
            process,
            socket_path,
            #[cfg(unix)]
            connection: None,
            request_id: 0,
            stopped: false,
        }))
    }
}

/// Handle to a launched mpv process.
///
/// The IPC socket is connected on first use, since mpv creates it shortly
/// after start-up.
#[derive(Debug)]
pub struct MpvHandle {
    process: Child,
    socket_path: PathBuf,
    #[cfg(unix)]
    connection: Option<UnixStream>,
    request_id: u64,
    stopped: bool,
}

impl MpvHandle {
    #[cfg(unix)]
    fn send(&mut self, command: Value) -> Result<(), NativeError> {
        self.request_id += 1;
        let line = ipc_line(command, self.request_id);

        if self.connection.is_none() {
            let stream = UnixStream::connect(&self.socket_path)
                .map_err(|err| NativeError::Ipc(err.to_string()))?;
            self.connection = Some(stream);
        }
        let Some(stream) = self.connection.as_mut() else {
            return Err(NativeError::Ipc("not connected".to_string()));
        };

        let written = stream
            .write_all(line.as_bytes())
            .and_then(|()| stream.flush());
        if let Err(err) = written {
            self.connection = None;
            return Err(NativeError::Ipc(err.to_string()));
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn send(&mut self, _command: Value) -> Result<(), NativeError> {
        Err(NativeError::Ipc(
            "mpv ipc needs unix domain sockets".to_string(),
        ))
    }
}

impl NativeHandle for MpvHandle {
    fn set_paused(&mut self, paused: bool) -> Result<(), NativeError> {
        if self.stopped {
            return Err(NativeError::Exited);
        }
        self.send(json!(["set_property", "pause", paused]))
    }

    fn is_alive(&mut self) -> bool {
        !self.stopped && matches!(self.process.try_wait(), Ok(None))
    }

    fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        let _ = self.send(json!(["quit"]));
        let _ = self.process.kill();
        let _ = self.process.wait();
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

impl Drop for MpvHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
