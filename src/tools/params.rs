//! Parameter specs reused across several tool groups.

use super::ParamSpec;

pub const START_BLOCK: ParamSpec = ParamSpec::with_default(
    "startblock",
    "0",
    "The integer block number to start searching for transactions",
);
pub const END_BLOCK: ParamSpec = ParamSpec::with_default(
    "endblock",
    "99999999",
    "The integer block number to stop searching for transactions",
);
pub const PAGE: ParamSpec =
    ParamSpec::with_default("page", "1", "The integer page number, if pagination is enabled");
pub const OFFSET: ParamSpec =
    ParamSpec::with_default("offset", "10", "The number of records displayed per page");
pub const SORT: ParamSpec = ParamSpec::with_default(
    "sort",
    "asc",
    "The sorting preference, use `asc` to sort by ascending and `desc` to sort by descending",
);

pub const TXHASH: ParamSpec =
    ParamSpec::required("txhash", "The string representing the transaction hash");
pub const BLOCK_NO: ParamSpec = ParamSpec::required("blockno", "The integer block number");

pub const TAG_HEX: ParamSpec = ParamSpec::required("tag", "The block number, in hex eg. 0xC36B3C");
pub const TAG_BLOCK_PARAM: ParamSpec = ParamSpec::required(
    "tag",
    "The string pre-defined block parameter, either `earliest`, `pending` or `latest`",
);
pub const INDEX_HEX: ParamSpec =
    ParamSpec::required("index", "The position of the index in the block, in hex eg. 0x5");

pub const START_DATE: ParamSpec = ParamSpec::required(
    "startdate",
    "The starting date in yyyy-MM-dd format, eg. 2019-02-01",
);
pub const END_DATE: ParamSpec = ParamSpec::required(
    "enddate",
    "The ending date in yyyy-MM-dd format, eg. 2019-02-28",
);
pub const SORT_REQUIRED: ParamSpec = ParamSpec::required(
    "sort",
    "The sorting preference, use `asc` to sort by ascending and `desc` to sort by descending",
);

/// `startdate`, `enddate`, `sort` as used by every daily statistics series.
pub const DATE_RANGE: &[ParamSpec] = &[START_DATE, END_DATE, SORT_REQUIRED];
