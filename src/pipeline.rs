//! Pipeline assembly from configuration.
//!
//! # Responsibilities
//! - Turn a `PipelineConfig` into decorators, in the configured order
//! - Compose them around a base executor

use std::time::Duration;

use crate::client::SharedExecutor;
use crate::config::{
    BackoffKind, DestinationsConfig, LayerKind, PipelineConfig, RetryConfig, StrategyKind,
};
use crate::decorator::{
    authorization, decorate, logging, set_header, BuildError, Decorator, StandardLogger,
    VerboseLogger,
};
use crate::load_balancer::{select_from, DestinationSet, RoundRobin, UniformRandom};
use crate::resilience::{retry_with_backoff, Backoff};

/// Build the decorators named by `config.layers`, innermost first.
///
/// Layers whose section is absent or disabled are left out.
pub fn build_decorators(config: &PipelineConfig) -> Result<Vec<Decorator>, BuildError> {
    let mut decorators = Vec::new();

    for layer in &config.layers {
        match layer {
            LayerKind::Logging => {
                if config.logging.enabled {
                    decorators.push(if config.logging.verbose {
                        logging(VerboseLogger)
                    } else {
                        logging(StandardLogger)
                    });
                }
            }
            LayerKind::Destinations => {
                if let Some(destinations) = &config.destinations {
                    decorators.push(destination_decorator(destinations)?);
                }
            }
            LayerKind::Headers => {
                for header in &config.headers {
                    decorators.push(set_header(&header.name, &header.value)?);
                }
            }
            LayerKind::Auth => {
                if let Some(auth) = &config.auth {
                    decorators.push(authorization(&auth.username, &auth.password)?);
                }
            }
            LayerKind::Retry => {
                if config.retry.enabled {
                    decorators.push(retry_with_backoff(
                        config.retry.max_attempts,
                        backoff(&config.retry),
                    )?);
                }
            }
        }
    }

    tracing::debug!(
        layers = ?decorators.iter().map(Decorator::name).collect::<Vec<_>>(),
        "Pipeline layers built"
    );
    Ok(decorators)
}

/// Build the configured decorators and compose them around `base`.
pub fn build(config: &PipelineConfig, base: SharedExecutor) -> Result<SharedExecutor, BuildError> {
    Ok(decorate(base, build_decorators(config)?))
}

fn destination_decorator(config: &DestinationsConfig) -> Result<Decorator, BuildError> {
    let set = DestinationSet::parse(&config.urls)?;
    Ok(match (config.strategy, config.seed) {
        (StrategyKind::Random, Some(seed)) => select_from(UniformRandom::seeded(seed), set),
        (StrategyKind::Random, None) => select_from(UniformRandom::from_entropy(), set),
        (StrategyKind::RoundRobin, _) => select_from(RoundRobin::new(), set),
    })
}

fn backoff(config: &RetryConfig) -> Backoff {
    let delay = Duration::from_millis(config.delay_ms);
    match config.backoff {
        BackoffKind::Fixed => Backoff::Fixed(delay),
        BackoffKind::Exponential => Backoff::Exponential {
            base: delay,
            max: Duration::from_millis(config.max_delay_ms),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::ScriptedExecutor;
    use crate::client::{CallContext, Executor, Request};
    use crate::config::{parse_config, AuthConfig, HeaderConfig};

    fn names(decorators: &[Decorator]) -> Vec<&'static str> {
        decorators.iter().map(Decorator::name).collect()
    }

    #[test]
    fn test_default_config_builds_logging_and_retry() {
        let decorators = build_decorators(&PipelineConfig::default()).unwrap();
        assert_eq!(names(&decorators), vec!["logging", "retry"]);
    }

    #[test]
    fn test_follows_configured_order() {
        let mut config = PipelineConfig::default();
        config.layers = vec![LayerKind::Retry, LayerKind::Auth, LayerKind::Headers];
        config.auth = Some(AuthConfig {
            username: "user".into(),
            password: "passwd".into(),
        });
        config.headers = vec![
            HeaderConfig { name: "x-a".into(), value: "1".into() },
            HeaderConfig { name: "x-b".into(), value: "2".into() },
        ];
        let decorators = build_decorators(&config).unwrap();
        assert_eq!(
            names(&decorators),
            vec!["retry", "authorization", "set_header", "set_header"]
        );
    }

    #[test]
    fn test_empty_destinations_fail_to_build() {
        let mut config = PipelineConfig::default();
        config.destinations = Some(DestinationsConfig {
            strategy: StrategyKind::Random,
            urls: Vec::new(),
            seed: Some(1),
        });
        assert!(matches!(
            build_decorators(&config),
            Err(BuildError::EmptyDestinationSet)
        ));
    }

    #[test]
    fn test_backoff_mapping() {
        let mut retry = RetryConfig::default();
        assert_eq!(backoff(&retry), Backoff::Fixed(Duration::from_millis(100)));
        retry.backoff = BackoffKind::Exponential;
        assert_eq!(
            backoff(&retry),
            Backoff::Exponential {
                base: Duration::from_millis(100),
                max: Duration::from_millis(2000)
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_built_pipeline_end_to_end() {
        let config = parse_config(
            r#"
            [auth]
            username = "user"
            password = "passwd"

            [destinations]
            strategy = "random"
            seed = 3
            urls = ["http://only.test/"]

            [retry]
            max_attempts = 4
            delay_ms = 10
            "#,
        )
        .unwrap();

        let base = ScriptedExecutor::failing_first(2);
        let client = build(&config, base.clone()).unwrap();
        let mut req = Request::get("http://origin.test/".parse().unwrap());
        let res = client.execute(&CallContext::new(), &mut req).await.unwrap();

        assert_eq!(res.text(), "call 3");
        for seen in base.requests() {
            assert_eq!(seen.url.as_str(), "http://only.test/");
            assert_eq!(seen.header("authorization"), Some("Basic dXNlcjpwYXNzd2Q="));
        }
    }
}
