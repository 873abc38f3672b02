// SPDX-License-Identifier: MPL-2.0

use core::fmt;

/// Error number.
///
/// Only the numbers a clock facility or a sleep primitive can report are listed.
/// The values follow Linux so that errors converted from the OS keep their number.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Errno {
    EINTR = 4,      /* Interrupted system call */
    EIO = 5,        /* I/O error */
    EFAULT = 14,    /* Bad address */
    ENODEV = 19,    /* No such device */
    EINVAL = 22,    /* Invalid argument */
    ENOSYS = 38,    /* Invalid system call number */
    EOVERFLOW = 75, /* Value too large for defined data type */
}

/// error used in the performance crates
#[derive(Debug, Clone, Copy)]
pub struct Error {
    errno: Errno,
    msg: Option<&'static str>,
}

impl Error {
    pub const fn new(errno: Errno) -> Self {
        Error { errno, msg: None }
    }

    pub const fn with_message(errno: Errno, msg: &'static str) -> Self {
        Error {
            errno,
            msg: Some(msg),
        }
    }

    pub const fn error(&self) -> Errno {
        self.errno
    }

    pub const fn message(&self) -> Option<&'static str> {
        self.msg
    }
}

impl From<Errno> for Error {
    fn from(errno: Errno) -> Self {
        Error::new(errno)
    }
}

impl AsRef<Error> for Error {
    fn as_ref(&self) -> &Error {
        self
    }
}

#[cfg(unix)]
impl From<nix::errno::Errno> for Error {
    fn from(errno: nix::errno::Errno) -> Self {
        use nix::errno::Errno as OsErrno;

        match errno {
            OsErrno::EINTR => Error::new(Errno::EINTR),
            OsErrno::EFAULT => Error::new(Errno::EFAULT),
            OsErrno::EINVAL => Error::new(Errno::EINVAL),
            OsErrno::ENOSYS => Error::new(Errno::ENOSYS),
            OsErrno::EOVERFLOW => Error::new(Errno::EOVERFLOW),
            OsErrno::ENODEV => Error::new(Errno::ENODEV),
            _ => Error::with_message(Errno::EIO, errno.desc()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.msg {
            Some(msg) => write!(f, "{:?}: {}", self.errno, msg),
            None => write!(f, "{:?}", self.errno),
        }
    }
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! return_errno {
    ($errno: expr) => {
        return Err($crate::Error::new($errno))
    };
}

#[macro_export]
macro_rules! return_errno_with_message {
    ($errno: expr, $message: expr) => {
        return Err($crate::Error::with_message($errno, $message))
    };
}
