use ferrous_doh_application::services::MessageBuilder;
use ferrous_doh_application::use_cases::LookupDomainUseCase;
use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::dns::create_transport;
use ferrous_doh_infrastructure::system::FastrandSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct LookupServices {
    pub lookup: LookupDomainUseCase,
}

impl LookupServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let builder = MessageBuilder::new(Arc::new(FastrandSource::new()))
            .with_label_policy(config.encoding.label_policy);
        let transport = create_transport(&config.transport)?;

        debug!(
            endpoint = %transport.endpoint(),
            protocol = transport.protocol_name(),
            label_policy = ?config.encoding.label_policy,
            "Lookup services initialized"
        );

        let lookup = LookupDomainUseCase::new(
            builder,
            transport,
            Duration::from_secs(config.transport.timeout),
        );

        Ok(Self { lookup })
    }
}
