use super::{ParamSpec, ToolDescriptor};

pub(super) static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "gas_gasestimate",
        description: "Returns the estimated time, in seconds, for a transaction to be confirmed on the blockchain.",
        module: "gastracker",
        action: "gasestimate",
        params: &[ParamSpec::required(
            "gasprice",
            "The price paid per unit of gas, in wei",
        )],
        fixed: &[],
    },
    ToolDescriptor {
        name: "gas_gasoracle",
        description: "Returns the current Safe, Proposed and Fast gas prices.",
        module: "gastracker",
        action: "gasoracle",
        params: &[],
        fixed: &[],
    },
];
