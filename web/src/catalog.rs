use shared_types::ServiceKind;

/// A bookable product as shown on the services grid. Prices are display
/// strings, not numbers; the catalog is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: ServiceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

pub const SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        id: ServiceKind::StudioAccess,
        title: "Studio Access",
        description: "Full access to our professional recording studio",
        price: "$150/hour",
    },
    ServiceOffering {
        id: ServiceKind::EngineerRequest,
        title: "Engineer Request",
        description: "Professional engineer assistance for your recording",
        price: "$200/hour",
    },
    ServiceOffering {
        id: ServiceKind::Mixing,
        title: "Mixing",
        description: "Professional mixing services for your tracks",
        price: "$300/song",
    },
];

pub fn offering(kind: ServiceKind) -> &'static ServiceOffering {
    match kind {
        ServiceKind::StudioAccess => &SERVICES[0],
        ServiceKind::EngineerRequest => &SERVICES[1],
        ServiceKind::Mixing => &SERVICES[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_distinct_offerings() {
        assert_eq!(SERVICES.len(), 3);
        for (i, a) in SERVICES.iter().enumerate() {
            for b in SERVICES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_offering_lookup_matches_catalog_entry() {
        for service in &SERVICES {
            assert_eq!(offering(service.id).title, service.title);
        }
        assert_eq!(offering(ServiceKind::Mixing).title, "Mixing");
        assert_eq!(offering(ServiceKind::StudioAccess).price, "$150/hour");
    }
}
