use super::params::BLOCK_NO;
use super::{ParamSpec, ToolDescriptor};

pub(super) static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "block_getblockreward",
        description: "Returns the block reward and 'Uncle' block rewards.",
        module: "block",
        action: "getblockreward",
        params: &[BLOCK_NO],
        fixed: &[],
    },
    ToolDescriptor {
        name: "block_getblockcountdown",
        description: "Returns the estimated time remaining, in seconds, until a certain block is mined.",
        module: "block",
        action: "getblockcountdown",
        params: &[BLOCK_NO],
        fixed: &[],
    },
    ToolDescriptor {
        name: "block_getblocknobytime",
        description: "Returns the block number that was mined at a certain timestamp.",
        module: "block",
        action: "getblocknobytime",
        params: &[
            ParamSpec::required(
                "timestamp",
                "The integer representing the Unix timestamp in **seconds**",
            ),
            ParamSpec::required(
                "closest",
                "The closest available block to the provided timestamp, either `before` or `after`",
            ),
        ],
        fixed: &[],
    },
    ToolDescriptor {
        name: "block_getblocktxnscount",
        description: "Returns the number of transactions in a specified block.",
        module: "block",
        action: "getblocktxnscount",
        params: &[BLOCK_NO],
        fixed: &[],
    },
];
