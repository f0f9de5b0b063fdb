use super::params::{END_BLOCK, OFFSET, PAGE, SORT, START_BLOCK, TXHASH};
use super::{ParamSpec, ToolDescriptor};

const ADDRESS: ParamSpec =
    ParamSpec::required("address", "The string representing the address to query");
const ADDRESSES: ParamSpec = ParamSpec::required(
    "address",
    "The addresses to check for balance, separated by `,` up to **20 addresses** per call",
);
const TOKEN_CONTRACT: ParamSpec = ParamSpec::optional(
    "contractaddress",
    "The token contract address to filter transfers by",
);
const BLOCK_TYPE: ParamSpec = ParamSpec::with_default(
    "blocktype",
    "blocks",
    "The pre-defined block type, either `blocks` for canonical blocks or `uncles` for uncle blocks only",
);
const OFFSET_100: ParamSpec =
    ParamSpec::with_default("offset", "100", "The number of withdrawals displayed per page");
const START_BLOCK_REQUIRED: ParamSpec = ParamSpec::required(
    "startblock",
    "The integer block number to start searching for transactions",
);
const END_BLOCK_REQUIRED: ParamSpec = ParamSpec::required(
    "endblock",
    "The integer block number to stop searching for transactions",
);

const PAGED_BY_ADDRESS: &[ParamSpec] = &[ADDRESS, START_BLOCK, END_BLOCK, PAGE, OFFSET, SORT];
const TOKEN_TRANSFERS: &[ParamSpec] = &[
    ADDRESS,
    TOKEN_CONTRACT,
    START_BLOCK,
    END_BLOCK,
    PAGE,
    OFFSET,
    SORT,
];

pub(super) static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "account_balance",
        description: "Returns the Ether balance of a given address.",
        module: "account",
        action: "balance",
        params: &[ADDRESS],
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_balancemulti",
        description: "Get Ether Balance for Multiple Addresses in a Single Call.",
        module: "account",
        action: "balancemulti",
        params: &[ADDRESSES],
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_txlist",
        description: "Returns the list of 'Normal' Transactions By Address.",
        module: "account",
        action: "txlist",
        params: PAGED_BY_ADDRESS,
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_txlistinternal",
        description: "Returns the list of 'Internal' Transactions by Address.",
        module: "account",
        action: "txlistinternal",
        params: PAGED_BY_ADDRESS,
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_txlistinternal_byhash",
        description: "Returns the list of 'Internal' Transactions by Transaction Hash.",
        module: "account",
        action: "txlistinternal",
        params: &[TXHASH],
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_txlistinternal_byblock",
        description: "Returns the list of 'Internal' Transactions by Block Range.",
        module: "account",
        action: "txlistinternal",
        params: &[START_BLOCK_REQUIRED, END_BLOCK_REQUIRED, PAGE, OFFSET, SORT],
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_tokentx",
        description: "Returns the list of ERC20 Token Transfer Events by Address.",
        module: "account",
        action: "tokentx",
        params: TOKEN_TRANSFERS,
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_tokennfttx",
        description: "Returns the list of ERC721 Token Transfer Events by Address.",
        module: "account",
        action: "tokennfttx",
        params: TOKEN_TRANSFERS,
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_token1155tx",
        description: "Returns the list of ERC1155 Token Transfer Events by Address.",
        module: "account",
        action: "token1155tx",
        params: TOKEN_TRANSFERS,
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_fundedby",
        description: "Returns the address that funded an address, and its relative age.",
        module: "account",
        action: "fundedby",
        params: &[ADDRESS],
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_getminedblocks",
        description: "Returns the list of blocks validated by an address.",
        module: "account",
        action: "getminedblocks",
        params: &[ADDRESS, BLOCK_TYPE, PAGE, OFFSET],
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_txsBeaconWithdrawal",
        description: "Returns the beacon chain withdrawals made to an address.",
        module: "account",
        action: "txsBeaconWithdrawal",
        params: &[ADDRESS, START_BLOCK, END_BLOCK, PAGE, OFFSET_100, SORT],
        fixed: &[],
    },
    ToolDescriptor {
        name: "account_tokenbalance",
        description: "Returns the current balance of an ERC-20 token of an address.",
        module: "account",
        action: "tokenbalance",
        params: &[
            ParamSpec::required("contractaddress", "The contract address of the ERC-20 token"),
            ADDRESS,
        ],
        fixed: &[("tag", "latest")],
    },
];
