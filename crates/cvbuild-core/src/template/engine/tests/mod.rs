//! Tests for template engine

use super::*;

mod helpers;

mod errors;
mod render_blocks;
