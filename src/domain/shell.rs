//! Host shell detection for the instructions printed after scaffolding.

/// Command syntax family of the shell that launched the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlavor {
    /// `cmd.exe` or PowerShell launched natively on Windows.
    WindowsNative,
    /// sh-compatible shells, including MSYS/Cygwin emulation on Windows.
    Posix,
}

impl ShellFlavor {
    /// POSIX-like shells export `_` (the last command); native Windows shells do not.
    pub fn detect(is_windows: bool, underscore_var_present: bool) -> Self {
        if is_windows && !underscore_var_present {
            ShellFlavor::WindowsNative
        } else {
            ShellFlavor::Posix
        }
    }

    pub fn from_env() -> Self {
        Self::detect(cfg!(windows), std::env::var_os("_").is_some())
    }

    pub fn prompt_symbol(self) -> &'static str {
        match self {
            ShellFlavor::WindowsNative => ">",
            ShellFlavor::Posix => "$",
        }
    }

    /// Prefix `command` with an environment variable assignment in this shell's syntax.
    pub fn with_env(self, name: &str, value: &str, command: &str) -> String {
        match self {
            ShellFlavor::WindowsNative => format!("SET {}={}&{}", name, value, command),
            ShellFlavor::Posix => format!("{}={} {}", name, value, command),
        }
    }
}
