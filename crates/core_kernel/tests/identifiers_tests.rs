//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, and display
//! formatting.

use core_kernel::{
    ClaimId, ClaimLabourId, ClaimPartId, CustomerId, LabourId, PartnerServiceId, SparePartId,
    UserId,
};
use uuid::Uuid;

mod claim_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ClaimId::new();
        let id2 = ClaimId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = ClaimId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = ClaimId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ClaimId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ClaimId::prefix(), "WCL");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = ClaimId::new();
        let string = original.to_string();
        let parsed: ClaimId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_json_serialization() {
        let id = ClaimId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ClaimId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod partner_service_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = PartnerServiceId::new();
        let id2 = PartnerServiceId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_display_format() {
        let id = PartnerServiceId::new();
        let display = id.to_string();
        assert!(display.starts_with("PRT-"));
    }

    #[test]
    fn test_roundtrip() {
        let original = PartnerServiceId::new();
        let string = original.to_string();
        let parsed: PartnerServiceId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }
}

mod cross_type_tests {
    use super::*;

    #[test]
    fn test_different_id_types_are_distinct() {
        // Same UUID, different identifier types; the type system keeps
        // a SparePartId from being passed where a LabourId is expected.
        let uuid = Uuid::new_v4();
        let part_id = SparePartId::from_uuid(uuid);
        let labour_id = LabourId::from_uuid(uuid);

        assert_eq!(*part_id.as_uuid(), *labour_id.as_uuid());
    }

    #[test]
    fn test_id_prefixes_are_unique() {
        let prefixes = vec![
            PartnerServiceId::prefix(),
            CustomerId::prefix(),
            UserId::prefix(),
            SparePartId::prefix(),
            LabourId::prefix(),
            ClaimId::prefix(),
            ClaimPartId::prefix(),
            ClaimLabourId::prefix(),
        ];

        let mut unique_prefixes: Vec<&str> = prefixes.clone();
        unique_prefixes.sort();
        unique_prefixes.dedup();

        assert_eq!(
            prefixes.len(),
            unique_prefixes.len(),
            "All identifier prefixes should be unique"
        );
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_nil_uuid() {
        let nil_uuid = Uuid::nil();
        let id = CustomerId::from_uuid(nil_uuid);
        assert!(id.as_uuid().is_nil());
    }
}
