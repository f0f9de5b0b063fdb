use super::{ParamSpec, ToolDescriptor};

const VERIFIED_ADDRESS: ParamSpec =
    ParamSpec::required("address", "The contract address that has a verified source code");

pub(super) static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "contract_getabi",
        description: "Returns the Contract Application Binary Interface (ABI) of a verified smart contract.",
        module: "contract",
        action: "getabi",
        params: &[VERIFIED_ADDRESS],
        fixed: &[],
    },
    ToolDescriptor {
        name: "contract_getsourcecode",
        description: "Returns the Contract Source Code for Verified Contract Source Codes.",
        module: "contract",
        action: "getsourcecode",
        params: &[VERIFIED_ADDRESS],
        fixed: &[],
    },
    ToolDescriptor {
        name: "contract_getcontractcreation",
        description: "Returns the Contract Creator and Creation Tx Hash.",
        module: "contract",
        action: "getcontractcreation",
        params: &[ParamSpec::required(
            "contractaddresses",
            "The contract addresses to check, separated by `,` up to 5 at a time",
        )],
        fixed: &[],
    },
    ToolDescriptor {
        name: "contract_checkverifystatus",
        description: "Returns the success or error status of a contract verification request.",
        module: "contract",
        action: "checkverifystatus",
        params: &[ParamSpec::required(
            "guid",
            "The unique guid received from the verification request",
        )],
        fixed: &[],
    },
];
