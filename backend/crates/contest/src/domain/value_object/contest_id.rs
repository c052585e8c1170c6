use kernel::id::Id;

pub type ContestId = Id<kernel::id::markers::Contest>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contest_id_new() {
        let contest_id = ContestId::new();
        assert_eq!(contest_id.as_uuid().get_version_num(), 4); // UUIDv4
    }
}
