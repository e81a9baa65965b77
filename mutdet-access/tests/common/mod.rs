use mutdet_access::modifiers::ACC_FILE_MASK;

/// Every class-file mask plus a spread of masks with high bits set.
pub fn sample_masks() -> impl Iterator<Item = u32> {
    let high = [0x1_0000, 0x2_0000, 0x8000_0000, 0xFFFF_0000, u32::MAX];
    (0..=ACC_FILE_MASK).chain(
        high.into_iter()
            .flat_map(|h| [h, h | 0x0002, h | 0x0018, h | 0x0600]),
    )
}
