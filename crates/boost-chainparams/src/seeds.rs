use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// A DNS seed queried during peer discovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
    /// Whether the seed answers service-bit filtered queries (`x<bits>.host`).
    pub supports_service_bits: bool,
}

/// A literal peer address: IPv6, or IPv4 mapped into `::ffff:0:0/96`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

pub(crate) const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed {
        name: "bnode01.cloudapp.net",
        host: "bnode01.cloudapp.net",
        supports_service_bits: false,
    },
    DnsSeed {
        name: "bnode02.cloudapp.net",
        host: "bnode02.cloudapp.net",
        supports_service_bits: false,
    },
    DnsSeed {
        name: "bnode03.cloudapp.net",
        host: "bnode03.cloudapp.net",
        supports_service_bits: false,
    },
];

// Empty: no audited seed dump ships with the registry, so main discovery
// relies on the DNS seeds above.
pub(crate) const MAIN_FIXED_SEEDS: &[SeedSpec6] = &[];
