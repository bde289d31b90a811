use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    pub height: u64,
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// A block as handed over by the indexing host. Only the top-level header is
/// read; the host repeats it under `block.header`, which is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmosBlock {
    pub header: BlockHeader,
}

impl CosmosBlock {
    pub fn height(&self) -> u64 {
        self.header.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_header_without_optional_fields() {
        let block: CosmosBlock =
            serde_json::from_value(json!({ "header": { "height": 42 } })).unwrap();

        assert_eq!(block.height(), 42);
        assert_eq!(block.header.chain_id, None);
    }

    #[test]
    fn ignores_unknown_block_contents() {
        let block: CosmosBlock = serde_json::from_value(json!({
            "blockId": { "hash": "ABCD" },
            "block": { "header": { "height": 8 } },
            "header": { "height": 7, "chainId": "cosmoshub-4", "time": "2024-01-01T00:00:00Z" },
            "txs": []
        }))
        .unwrap();

        assert_eq!(block.height(), 7);
        assert_eq!(block.header.chain_id.as_deref(), Some("cosmoshub-4"));
    }
}
