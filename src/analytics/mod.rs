// Analytics — KPI aggregations and trending-probability scoring.
//
// Every function here is a pure pass over already-loaded export records;
// loading lives in `data` and presentation in `output`.

pub mod engagement;
pub mod hashtags;
pub mod trending;
