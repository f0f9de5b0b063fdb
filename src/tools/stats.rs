use super::params::{DATE_RANGE, END_DATE, SORT_REQUIRED, START_DATE};
use super::{ParamSpec, ToolDescriptor};

/// Descriptor for a `(startdate, enddate, sort)` daily series.
const fn daily(
    name: &'static str,
    action: &'static str,
    description: &'static str,
) -> ToolDescriptor {
    ToolDescriptor {
        name,
        description,
        module: "stats",
        action,
        params: DATE_RANGE,
        fixed: &[],
    }
}

const fn snapshot(
    name: &'static str,
    action: &'static str,
    description: &'static str,
) -> ToolDescriptor {
    ToolDescriptor {
        name,
        description,
        module: "stats",
        action,
        params: &[],
        fixed: &[],
    }
}

pub(super) static TOOLS: &[ToolDescriptor] = &[
    snapshot(
        "stats_ethsupply",
        "ethsupply",
        "Returns the current amount of Ether in circulation excluding ETH2 Staking rewards and EIP1559 burnt fees.",
    ),
    snapshot(
        "stats_ethsupply2",
        "ethsupply2",
        "Returns the current amount of Ether in circulation, ETH2 Staking rewards, EIP1559 burnt fees, and total withdrawn ETH from the beacon chain.",
    ),
    snapshot("stats_ethprice", "ethprice", "Returns the latest price of 1 ETH."),
    ToolDescriptor {
        name: "stats_chainsize",
        description: "Returns the size of the Ethereum blockchain, in bytes, over a date range.",
        module: "stats",
        action: "chainsize",
        params: &[
            START_DATE,
            END_DATE,
            ParamSpec::required(
                "clienttype",
                "The Ethereum node client to use, either `geth` or `parity`",
            ),
            ParamSpec::required(
                "syncmode",
                "The type of node to run, either `default` or `archive`",
            ),
            SORT_REQUIRED,
        ],
        fixed: &[],
    },
    snapshot(
        "stats_nodecount",
        "nodecount",
        "Returns the total number of discoverable Ethereum nodes.",
    ),
    ToolDescriptor {
        name: "stats_tokensupply",
        description: "Returns the current amount of an ERC-20 token in circulation.",
        module: "stats",
        action: "tokensupply",
        params: &[ParamSpec::required(
            "contractaddress",
            "The contract address of the ERC-20 token",
        )],
        fixed: &[],
    },
    daily(
        "stats_dailytxnfee",
        "dailytxnfee",
        "Returns the amount of transaction fees paid to miners per day.",
    ),
    daily(
        "stats_dailynewaddress",
        "dailynewaddress",
        "Returns the number of new Ethereum addresses created per day.",
    ),
    daily(
        "stats_dailynetutilization",
        "dailynetutilization",
        "Returns the daily average gas used over gas limit, in percentage.",
    ),
    daily(
        "stats_dailyavghashrate",
        "dailyavghashrate",
        "Returns the historical measure of processing power of the Ethereum network.",
    ),
    daily(
        "stats_dailytx",
        "dailytx",
        "Returns the number of transactions performed on the Ethereum blockchain per day.",
    ),
    daily(
        "stats_dailyavgnetdifficulty",
        "dailyavgnetdifficulty",
        "Returns the historical mining difficulty of the Ethereum network.",
    ),
    daily(
        "stats_ethdailyprice",
        "ethdailyprice",
        "Returns the historical price of 1 ETH.",
    ),
    daily(
        "stats_dailyavggaslimit",
        "dailyavggaslimit",
        "Returns the historical daily average gas limit of the Ethereum network.",
    ),
];
