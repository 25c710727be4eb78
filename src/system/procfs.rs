use std::fs;
use std::io;
use std::path::PathBuf;

use super::ProcessSource;

pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Counter keys as printed in `/proc/<pid>/sched`. Older kernels nest the
/// schedstats fields under `se.statistics`.
const IOWAIT_KEYS: [&str; 2] = ["se.iowait_count", "se.statistics.iowait_count"];

/// Reads processes out of a procfs tree rooted at `root`.
#[derive(Clone, Debug)]
pub struct ProcFs {
    root: PathBuf,
}

impl ProcFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProcFs { root: root.into() }
    }

    fn pid_file(&self, pid: u32, name: &str) -> PathBuf {
        self.root.join(pid.to_string()).join(name)
    }
}

impl ProcessSource for ProcFs {
    fn pids(&self) -> io::Result<Vec<u32>> {
        let entries = fs::read_dir(&self.root)?;
        let mut pids = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            if let Some(pid) = name.to_str().and_then(parse_pid) {
                pids.push(pid);
            }
        }
        Ok(pids)
    }

    fn iowait_count(&self, pid: u32) -> Option<u64> {
        let contents = fs::read_to_string(self.pid_file(pid, "sched")).ok()?;
        parse_iowait_count(&contents)
    }

    fn name_of(&self, pid: u32) -> Option<String> {
        if let Ok(raw) = fs::read(self.pid_file(pid, "cmdline"))
            && let Some(name) = cmdline_name(&raw)
        {
            return Some(name);
        }
        let raw = fs::read(self.pid_file(pid, "status")).ok()?;
        status_name(&String::from_utf8_lossy(&raw))
    }
}

/// Directory entries such as `self`, `sys` or `0` are not processes.
pub fn parse_pid(name: &str) -> Option<u32> {
    name.parse::<u32>().ok().filter(|&pid| pid > 0)
}

/// Finds the `se.iowait_count : <n>` line of a `sched` file.
pub fn parse_iowait_count(contents: &str) -> Option<u64> {
    contents.lines().find_map(|line| {
        let rest = IOWAIT_KEYS
            .iter()
            .find_map(|key| line.strip_prefix(*key))?;
        let value = rest.trim_start().strip_prefix(':')?;
        value.split_whitespace().next()?.parse().ok()
    })
}

/// First line of a `cmdline` file, cut at the first NUL (argv[0]).
pub fn cmdline_name(raw: &[u8]) -> Option<String> {
    let line = raw.split(|&b| b == b'\n').next()?;
    let arg0 = line.split(|&b| b == 0).next()?;
    if arg0.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(arg0).into_owned())
}

/// Value of the `Name:\t` line of a `status` file, taken verbatim.
pub fn status_name(contents: &str) -> Option<String> {
    contents
        .split('\n')
        .find_map(|line| line.strip_prefix("Name:\t"))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
