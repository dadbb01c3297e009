//! Startup-time registration of interceptors.

use std::sync::Arc;

use crate::interceptor::chain::InterceptorChain;
use crate::interceptor::gate::{Interceptor, RestInterceptor};
use crate::pattern::RestPattern;

/// One registered interceptor and its position in the chain.
#[derive(Debug)]
pub struct InterceptorRegistration {
    interceptor: RestInterceptor,
    order: i32,
}

impl InterceptorRegistration {
    fn new(interceptor: RestInterceptor) -> Self {
        Self { interceptor, order: 0 }
    }

    /// Append patterns the interceptor applies to.
    pub fn add_patterns<I>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = RestPattern>,
    {
        self.interceptor.add_patterns(&patterns.into_iter().collect());
        self
    }

    /// Append patterns the interceptor must skip, even if included.
    pub fn exclude_patterns<I>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = RestPattern>,
    {
        self.interceptor.exclude_patterns(&patterns.into_iter().collect());
        self
    }

    /// Lower values run earlier. Default is 0.
    pub fn order(&mut self, order: i32) -> &mut Self {
        self.order = order;
        self
    }

    pub fn interceptor(&self) -> &RestInterceptor {
        &self.interceptor
    }

    pub fn order_value(&self) -> i32 {
        self.order
    }

    pub(crate) fn into_parts(self) -> (RestInterceptor, i32) {
        (self.interceptor, self.order)
    }
}

/// Collects interceptors during startup; [`build`](Self::build) freezes
/// them into an [`InterceptorChain`].
#[derive(Debug, Default)]
pub struct InterceptorRegistry {
    registrations: Vec<InterceptorRegistration>,
}

impl InterceptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register custom logic under `name`.
    pub fn add_interceptor(
        &mut self,
        name: impl Into<String>,
        logic: impl Interceptor + 'static,
    ) -> &mut InterceptorRegistration {
        self.add(RestInterceptor::from_arc(name, Arc::new(logic)))
    }

    /// Register a gate that was configured up front.
    pub fn add(&mut self, interceptor: RestInterceptor) -> &mut InterceptorRegistration {
        self.registrations.push(InterceptorRegistration::new(interceptor));
        let last = self.registrations.len() - 1;
        &mut self.registrations[last]
    }

    pub fn registrations(&self) -> &[InterceptorRegistration] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn build(self) -> InterceptorChain {
        InterceptorChain::from_registrations(self.registrations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::gate::PassThrough;
    use crate::pattern::HttpMethod;

    #[test]
    fn test_registration_defaults() {
        let mut registry = InterceptorRegistry::new();
        let registration = registry.add_interceptor("auth", PassThrough);

        assert_eq!(registration.order_value(), 0);
        assert!(registration.interceptor().include().is_empty());
        assert!(registration.interceptor().exclude().is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_patterns_are_appended() {
        let mut registry = InterceptorRegistry::new();
        registry
            .add_interceptor("auth", PassThrough)
            .add_patterns([RestPattern::of("/foo", HttpMethod::Get)])
            .add_patterns([
                RestPattern::of("/bar", HttpMethod::Post),
                RestPattern::from_template("/baz/**"),
            ])
            .exclude_patterns([RestPattern::of("/foo", HttpMethod::Get)])
            .order(5);

        let registration = &registry.registrations()[0];
        assert_eq!(registration.interceptor().include().paths(), vec!["/foo", "/bar", "/baz/**"]);
        assert_eq!(registration.interceptor().exclude().paths(), vec!["/foo"]);
        assert_eq!(registration.order_value(), 5);
    }

    #[test]
    fn test_build_orders_chain() {
        let mut registry = InterceptorRegistry::new();
        registry.add_interceptor("late", PassThrough).order(10);
        registry.add_interceptor("first-default", PassThrough);
        registry.add_interceptor("early", PassThrough).order(-1);
        registry.add_interceptor("second-default", PassThrough);

        let chain = registry.build();
        assert_eq!(chain.names(), vec!["early", "first-default", "second-default", "late"]);
    }
}
