// SPDX-License-Identifier: MPL-2.0

#![allow(unused)]

pub(crate) use std::{sync::Arc, time::Duration};

pub(crate) use log::{debug, info, trace, warn};

pub(crate) use crate::{
    error::{Errno, Error},
    return_errno, return_errno_with_message,
};

pub(crate) type Result<T> = core::result::Result<T, Error>;
