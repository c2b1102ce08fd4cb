//! Links printed on table cards (and encoded in their QR codes).

/// The customer portal URL for `table`, or the bare portal without one.
pub fn portal_link(base_url: &str, table: Option<u32>) -> String {
    let base = base_url.trim_end_matches('/');
    match table {
        Some(table) => format!("{base}/?table={table}"),
        None => format!("{base}/"),
    }
}
