//! JSON report output.

use crate::models::SubnetRecord;
use crate::processing::QueryParams;
use crate::{Plan, PlanSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything needed to reproduce and consume a plan.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    /// Query string that reproduces this plan, e.g. `network=15.0.0.0&hosts=50%2C20`.
    pub query: String,
    pub summary: PlanSummary,
    pub subnets: Vec<SubnetRecord>,
}

impl Report {
    pub fn new(plan: &Plan, params: &QueryParams) -> Self {
        Report {
            generated_at: Utc::now(),
            query: params.to_query_string(),
            summary: plan.summary.clone(),
            subnets: plan.subnets.clone(),
        }
    }
}

/// Pretty-printed JSON report.
pub fn render_json(plan: &Plan, params: &QueryParams) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Report::new(plan, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{plan, PlanOptions};

    #[test]
    fn test_render_json() {
        let params = QueryParams::new(Some("15.0.0.0"), Some("50"));
        let plan = plan("15.0.0.0", "50", &PlanOptions::default()).unwrap();
        let json = render_json(&plan, &params).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["query"], "network=15.0.0.0&hosts=50");
        assert_eq!(value["summary"]["subnetCount"], 1);
        assert_eq!(value["summary"]["nextFreeAddress"], "15.0.0.64");
        assert_eq!(value["subnets"][0]["prefixLength"], 26);
        assert_eq!(value["subnets"][0]["wildcardMask"], "0.0.0.63");
        assert!(value["generatedAt"].is_string());

        let report: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(report.subnets, plan.subnets);
    }
}
