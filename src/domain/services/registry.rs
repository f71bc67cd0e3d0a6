//! # Grind Spot Registry
//!
//! 組み込みのグラインドスポットテーブル

use crate::domain::entities::grind_spot::GrindSpot;

/// グラインドスポットレジストリ
///
/// 対応するスポットの固定テーブル。起動時に一度だけ構築され、
/// 以降は読み取り専用。外部設定は持たない。
/// スポットを追加する場合はテーブルに行を足すだけでよい。
#[derive(Debug, Clone)]
pub struct GrindSpotRegistry {
    spots: Vec<GrindSpot>,
}

impl GrindSpotRegistry {
    /// 組み込みテーブルからレジストリを構築
    pub fn load() -> Self {
        let spots = vec![
            GrindSpot::new(110, "Starlight Jade Forest", "44490_0"),
            GrindSpot::new(153, "Darkseeker's Retreat", "65330_0"),
            GrindSpot::new(148, "Tungrad Ruins", "65328_0"),
            GrindSpot::new(8, "Crypt of Resting Thoughts", "44450_0"),
            GrindSpot::new(7, "Thornwood Forest", "44451_0"),
            GrindSpot::new(27, "Ash Forest", "44411_0"),
            GrindSpot::new(121, "Troll Habitat", "59798_0"),
            GrindSpot::new(151, "[Dehkia] Cyclops Land", "44522_0"),
            GrindSpot::new(146, "[Dehkia] Thornwood Forest", "44520_0"),
            GrindSpot::new(145, "[Dehkia] Tunkuta", "44521_0"),
            GrindSpot::new(143, "[Dehkia] Ash Forest", "44518_0"),
            GrindSpot::new(144, "[Dehkia] Olun's Valley", "44519_0"),
            GrindSpot::new(155, "[Dehkia] Aakman Temple", "65400_0"),
            GrindSpot::new(97, "Gyfin Rhasia Underground", "44516_0"),
            GrindSpot::new(120, "Primal Giant Post", "59799_0"),
            GrindSpot::new(17, "Orc Camp", "44482_0"),
            GrindSpot::new(147, "City of the Dead", "65329_0"),
            GrindSpot::new(2, "Star's End", "44400_0"),
            GrindSpot::new(1, "Sycraia Abyssal Ruins (Lower)", "44380_0"),
            GrindSpot::new(9, "Kratuga Ancient Ruins", "44423_0"),
            GrindSpot::new(4, "Tunkuta", "44454_0"),
            GrindSpot::new(88, "Waragon Nest", "721048_0"),
        ];

        Self { spots }
    }

    /// IDの完全一致でスポットを検索
    ///
    /// 部分一致や曖昧検索は行わない
    pub fn find(&self, id: i32) -> Option<&GrindSpot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    /// 登録されているスポットの一覧（テーブル定義順）
    pub fn spots(&self) -> &[GrindSpot] {
        &self.spots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_no_duplicate_ids() {
        let registry = GrindSpotRegistry::load();

        let ids: HashSet<i32> = registry.spots().iter().map(|spot| spot.id).collect();

        assert_eq!(ids.len(), registry.spots().len());
    }

    #[test]
    fn test_registry_find_exact_match() {
        let registry = GrindSpotRegistry::load();

        let spot = registry.find(110).unwrap();

        assert_eq!(spot.name, "Starlight Jade Forest");
        assert_eq!(spot.drop_key, "44490_0");
    }

    #[test]
    fn test_registry_find_unknown_id() {
        let registry = GrindSpotRegistry::load();

        assert!(registry.find(999).is_none());
        assert!(registry.find(-1).is_none());
    }

    #[test]
    fn test_registry_preserves_table_order() {
        let registry = GrindSpotRegistry::load();

        assert_eq!(registry.spots()[0].id, 110);
        assert_eq!(registry.spots().last().unwrap().id, 88);
        assert_eq!(registry.spots().len(), 22);
    }
}
