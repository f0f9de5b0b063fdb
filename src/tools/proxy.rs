use super::params::{INDEX_HEX, TAG_BLOCK_PARAM, TAG_HEX, TXHASH};
use super::{ParamSpec, ToolDescriptor};

const TO: ParamSpec =
    ParamSpec::required("to", "The string representing the address to interact with");
const DATA: ParamSpec = ParamSpec::required(
    "data",
    "The hash of the method signature and encoded parameters",
);
const ADDRESS: ParamSpec = ParamSpec::required("address", "The string representing the address");

pub(super) static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "proxy_eth_blockNumber",
        description: "Returns the number of most recent block.",
        module: "proxy",
        action: "eth_blockNumber",
        params: &[],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getBlockByNumber",
        description: "Returns information about a block by block number.",
        module: "proxy",
        action: "eth_getBlockByNumber",
        params: &[
            TAG_HEX,
            ParamSpec::boolean(
                "boolean",
                "When true, returns full transaction objects, when false only the transaction hashes",
            ),
        ],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getUncleByBlockNumberAndIndex",
        description: "Returns information about a uncle by block number.",
        module: "proxy",
        action: "eth_getUncleByBlockNumberAndIndex",
        params: &[TAG_HEX, INDEX_HEX],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getBlockTransactionCountByNumber",
        description: "Returns the number of transactions in a block.",
        module: "proxy",
        action: "eth_getBlockTransactionCountByNumber",
        params: &[TAG_HEX],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getTransactionByHash",
        description: "Returns information about a transaction requested by transaction hash.",
        module: "proxy",
        action: "eth_getTransactionByHash",
        params: &[TXHASH],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getTransactionByBlockNumberAndIndex",
        description: "Returns information about a transaction requested by block number and transaction index position.",
        module: "proxy",
        action: "eth_getTransactionByBlockNumberAndIndex",
        params: &[TAG_HEX, INDEX_HEX],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getTransactionCount",
        description: "Returns the number of transactions performed by an address.",
        module: "proxy",
        action: "eth_getTransactionCount",
        params: &[ADDRESS, TAG_BLOCK_PARAM],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getTransactionReceipt",
        description: "Returns the receipt of a transaction that has been validated.",
        module: "proxy",
        action: "eth_getTransactionReceipt",
        params: &[TXHASH],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_call",
        description: "Executes a new message call immediately without creating a transaction on the block chain.",
        module: "proxy",
        action: "eth_call",
        params: &[TO, DATA, TAG_BLOCK_PARAM],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getCode",
        description: "Returns code at a given address.",
        module: "proxy",
        action: "eth_getCode",
        params: &[ADDRESS, TAG_BLOCK_PARAM],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_getStorageAt",
        description: "Returns the value from a storage position at a given address.",
        module: "proxy",
        action: "eth_getStorageAt",
        params: &[
            ADDRESS,
            ParamSpec::required("position", "The hex code of the position in storage, eg 0x0"),
            TAG_BLOCK_PARAM,
        ],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_gasPrice",
        description: "Returns the current price per gas in wei.",
        module: "proxy",
        action: "eth_gasPrice",
        params: &[],
        fixed: &[],
    },
    ToolDescriptor {
        name: "proxy_eth_estimateGas",
        description: "Makes a call or transaction, which won't be added to the blockchain and returns the used gas.",
        module: "proxy",
        action: "eth_estimateGas",
        params: &[
            DATA,
            TO,
            ParamSpec::optional("value", "The value sent in this transaction, in hex eg. 0xff22"),
            ParamSpec::optional(
                "gas",
                "The amount of gas provided for the transaction, in hex eg. 0x5f5e0ff",
            ),
            ParamSpec::optional("gasPrice", "The gas price paid for each unit of gas, in wei"),
        ],
        fixed: &[],
    },
];
