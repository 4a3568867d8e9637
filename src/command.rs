use std::{
    io::{self, Read},
    process::{Child, Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

/// How often a child with a deadline is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the child was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("command '{program}' not found")]
    NotFound { program: String },
    #[error("command '{program}' timed out after {timeout:?}")]
    TimedOut { program: String, timeout: Duration },
    #[error("failed to run '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Spawns external programs on behalf of the SSID strategies.
pub trait CommandRunner {
    /// Runs `program` to completion and captures its output. With a
    /// `timeout`, a child still running at the deadline is killed along with
    /// anything it started, and reaped, before `RunError::TimedOut` is
    /// returned.
    fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, RunError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, RunError> {
        (**self).run(program, args, timeout)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(program: &str, args: &[&str]) -> Command {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(winapi::um::winbase::CREATE_NO_WINDOW);
        }
        // own process group, so a timeout can take down whatever the child started
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }
        command
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, RunError> {
        let io_err = |source: io::Error| RunError::Io {
            program: program.to_owned(),
            source,
        };

        trace!("Running {} {:?} (timeout {:?})", program, args, timeout);
        let mut child = Self::command(program, args).spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RunError::NotFound {
                    program: program.to_owned(),
                }
            } else {
                io_err(e)
            }
        })?;

        // drain both pipes while waiting, a full pipe would stall the child
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match timeout {
            Some(timeout) => match wait_until(&mut child, Instant::now() + timeout) {
                Ok(Some(status)) => status,
                Ok(None) => {
                    kill_and_reap(&mut child, program);
                    // reader threads end on their own once the pipes close
                    return Err(RunError::TimedOut {
                        program: program.to_owned(),
                        timeout,
                    });
                }
                Err(e) => {
                    kill_and_reap(&mut child, program);
                    return Err(io_err(e));
                }
            },
            None => child.wait().map_err(io_err)?,
        };

        Ok(CommandOutput {
            code: status.code(),
            stdout: collect(stdout),
            stderr: collect(stderr),
        })
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    let mut pipe = pipe?;
    Some(thread::spawn(move || {
        let mut buf = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut buf) {
            debug!("Couldn't read child output: {}", e);
        }
        buf
    }))
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

fn wait_until(child: &mut Child, deadline: Instant) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

#[cfg(unix)]
fn kill(child: &mut Child) -> io::Result<()> {
    // the group id is the child's pid, see `SystemRunner::command`
    let pgid = child.id() as libc::pid_t;
    if unsafe { libc::killpg(pgid, libc::SIGKILL) } == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn kill(child: &mut Child) -> io::Result<()> {
    child.kill()
}

fn kill_and_reap(child: &mut Child, program: &str) {
    if let Err(e) = kill(child) {
        // already exited between the last poll and now
        debug!("Couldn't kill {} (pid {}): {}", program, child.id(), e);
    }
    if let Err(e) = child.wait() {
        warn!("Couldn't reap {} (pid {}): {}", program, child.id(), e);
    }
}
