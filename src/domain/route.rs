//! Link targets for explorer pages.

/// Explorer pages a dashboard element can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Block list.
    Blocks,
    /// Rollup batch list.
    Batches,
    /// Transaction list.
    Txs,
    /// A single transaction by hash.
    Tx(&'a str),
}

/// Build the href for a route. Pure string construction.
#[must_use]
pub fn route(target: Route<'_>) -> String {
    match target {
        Route::Blocks => "/blocks".to_string(),
        Route::Batches => "/batches".to_string(),
        Route::Txs => "/txs".to_string(),
        Route::Tx(hash) => format!("/tx/{hash}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route() {
        let cases = [
            (Route::Blocks, "/blocks"),
            (Route::Batches, "/batches"),
            (Route::Txs, "/txs"),
            (Route::Tx("0xabc"), "/tx/0xabc"),
        ];

        for (target, expected) in cases {
            assert_eq!(route(target), expected, "{target:?}");
        }
    }
}
