use org_members::actions::MembersActions;
use org_members::store::SharedStore;
use org_members::test_support::FetchCall;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Carry out recorded page fetches the way the UI container does
pub async fn run_fetches(actions: &MembersActions<SharedStore>, calls: &[FetchCall]) {
    for call in calls {
        let _ = match call {
            FetchCall::Members {
                organization_key,
                query,
            } => actions.fetch_members(organization_key, query.as_deref()).await,
            FetchCall::MoreMembers {
                organization_key,
                query,
            } => {
                actions
                    .fetch_more_members(organization_key, query.as_deref())
                    .await
            }
        };
    }
}
