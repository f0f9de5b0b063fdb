use super::params::TXHASH;
use super::ToolDescriptor;

pub(super) static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "transaction_getstatus",
        description: "Returns the status code of a contract execution.",
        module: "transaction",
        action: "getstatus",
        params: &[TXHASH],
        fixed: &[],
    },
    ToolDescriptor {
        name: "transaction_gettxreceiptstatus",
        description: "Returns the status code of a transaction execution.",
        module: "transaction",
        action: "gettxreceiptstatus",
        params: &[TXHASH],
        fixed: &[],
    },
];
