use super::{ParamSpec, ToolDescriptor};

const TOPIC_DOC: &str = "The topic numbers to search for limited to topic0, topic1, topic2, topic3";
const OPR_DOC: &str =
    "The topic operator when multiple topic combinations are used limited to `and` or `or`";

const FROM_BLOCK: ParamSpec = ParamSpec::required(
    "fromBlock",
    "The integer block number to start searching for logs eg. 12878196",
);
const TO_BLOCK: ParamSpec = ParamSpec::required(
    "toBlock",
    "The integer block number to stop searching for logs eg. 12879196",
);
const ADDRESS: ParamSpec =
    ParamSpec::required("address", "The string representing the address to check for logs");

const TOPIC0: ParamSpec = ParamSpec::optional("topic0", TOPIC_DOC);
const TOPIC1: ParamSpec = ParamSpec::optional("topic1", TOPIC_DOC);
const TOPIC2: ParamSpec = ParamSpec::optional("topic2", TOPIC_DOC);
const TOPIC3: ParamSpec = ParamSpec::optional("topic3", TOPIC_DOC);
const TOPIC0_1_OPR: ParamSpec = ParamSpec::optional("topic0_1_opr", OPR_DOC);
const TOPIC1_2_OPR: ParamSpec = ParamSpec::optional("topic1_2_opr", OPR_DOC);
const TOPIC2_3_OPR: ParamSpec = ParamSpec::optional("topic2_3_opr", OPR_DOC);
const TOPIC0_2_OPR: ParamSpec = ParamSpec::optional("topic0_2_opr", OPR_DOC);
const TOPIC0_3_OPR: ParamSpec = ParamSpec::optional("topic0_3_opr", OPR_DOC);
const TOPIC1_3_OPR: ParamSpec = ParamSpec::optional("topic1_3_opr", OPR_DOC);
const PAGE_OPT: ParamSpec =
    ParamSpec::optional("page", "The integer page number, if pagination is enabled");
const OFFSET_OPT: ParamSpec = ParamSpec::optional(
    "offset",
    "The number of records displayed per page limited to **1000 records** per query",
);

pub(super) static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "logs_getLogsByAddress",
        description: "Returns the event logs from an address, with optional filtering by block range.",
        module: "logs",
        action: "getLogs",
        params: &[
            ADDRESS,
            ParamSpec::optional(
                "fromBlock",
                "The integer block number to start searching for logs eg. 12878196",
            ),
            ParamSpec::optional(
                "toBlock",
                "The integer block number to stop searching for logs eg. 12879196",
            ),
            ParamSpec::with_default("page", "1", "The integer page number, if pagination is enabled"),
            ParamSpec::with_default(
                "offset",
                "1000",
                "The number of records displayed per page limited to **1000 records** per query",
            ),
        ],
        fixed: &[],
    },
    ToolDescriptor {
        name: "logs_getLogsByTopics",
        description: "Returns the events log in a block range, filtered by topics.",
        module: "logs",
        action: "getLogs",
        params: &[
            FROM_BLOCK,
            TO_BLOCK,
            TOPIC0,
            TOPIC1,
            TOPIC2,
            TOPIC3,
            TOPIC0_1_OPR,
            TOPIC1_2_OPR,
            TOPIC2_3_OPR,
            TOPIC0_2_OPR,
            TOPIC0_3_OPR,
            TOPIC1_3_OPR,
            PAGE_OPT,
            OFFSET_OPT,
        ],
        fixed: &[],
    },
    ToolDescriptor {
        name: "logs_getLogsByAddressAndTopics",
        description: "Returns the event logs from an address, filtered by topics and block range.",
        module: "logs",
        action: "getLogs",
        params: &[
            FROM_BLOCK,
            TO_BLOCK,
            ADDRESS,
            TOPIC0,
            TOPIC1,
            TOPIC2,
            TOPIC3,
            TOPIC0_1_OPR,
            TOPIC1_2_OPR,
            TOPIC2_3_OPR,
            TOPIC0_2_OPR,
            TOPIC0_3_OPR,
            TOPIC1_3_OPR,
            PAGE_OPT,
            OFFSET_OPT,
        ],
        fixed: &[],
    },
];
