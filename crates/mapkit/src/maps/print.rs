//! `key: value` listings.

use std::io::{self, Write};

use mapkit_core::Mapping;

use super::sort::sort_keys;

/// Write one `key: value` line per entry, in `sort_keys` order.
pub fn write_pretty<W: Write>(map: &Mapping, mut out: W) -> io::Result<()> {
    for key in sort_keys(map) {
        writeln!(out, "{}: {}", key, map[key])?;
    }
    out.flush()
}

/// `write_pretty` to stdout.
pub fn pretty_print(map: &Mapping) -> io::Result<()> {
    write_pretty(map, io::stdout().lock())
}
