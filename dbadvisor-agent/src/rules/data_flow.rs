use crate::requirements::Requirements;

pub const FLOW_ENTRY: &str = "Client Request → API Gateway → Business Logic";
pub const FLOW_EXIT: &str = "Database → Response → Client";

/// Ordered pipeline stages for the recommended data path.
pub fn plan(requirements: &Requirements) -> Vec<String> {
    let mut flow = vec![FLOW_ENTRY.to_string()];

    if requirements.high_read_throughput {
        flow.push("Business Logic → Cache Layer → Database".to_string());
        flow.push("Cache Miss → Database → Update Cache".to_string());
    } else {
        flow.push("Business Logic → Database".to_string());
    }

    flow.push(FLOW_EXIT.to_string());
    flow
}
