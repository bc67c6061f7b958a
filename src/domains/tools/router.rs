//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every registered name (canonical, alias or preset) becomes one route
//! whose handler dispatches through the shared [`ToolRegistry`], so the
//! STDIO/TCP transports and the HTTP transport run the same code path.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::descriptor::ToolDescriptor;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .descriptors()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(create_route(descriptor, registry.clone()))
        })
}

/// Create a ToolRoute for STDIO/TCP transport.
fn create_route<S>(descriptor: &ToolDescriptor, registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = descriptor.name().to_string();
    ToolRoute::new_dyn(descriptor.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let registry = registry.clone();
        let name = name.clone();
        async move {
            registry
                .dispatch(&name, args)
                .await
                .map(|outcome| outcome.into_call_result())
                .map_err(|e| McpError::invalid_params(e.to_string(), None))
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    struct TestServer {}

    fn test_registry() -> Arc<ToolRegistry> {
        Arc::new(ToolRegistry::builtin(Arc::new(Config::default())).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tools = router.list_all();

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"encode_base64"));
        assert!(names.contains(&"base64-decode"));
        assert!(names.contains(&"convert_number_base"));
        assert!(names.contains(&"hash_sha256"));
        assert!(names.contains(&"jwt_decode"));
        assert!(names.contains(&"file_read"));
        assert!(names.contains(&"cat"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry = test_registry();
        let registry_names: Vec<String> = registry
            .tool_names()
            .into_iter()
            .map(String::from)
            .collect();

        let router: ToolRouter<TestServer> = build_tool_router(registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in &registry_names {
            assert!(router_names.contains(&name.as_str()));
        }
    }
}
