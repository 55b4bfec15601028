// crates/domain/src/attribute_change.rs
use psiftp_shared_kernel::FileAttributes;

/// Bits to set and bits to clear in one `sattr` request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeChange {
    pub set: FileAttributes,
    pub clear: FileAttributes,
}

impl AttributeChange {
    /// Parses flags such as `+rh-a`.
    ///
    /// Letters go to the "set" group until a `-` switches to "clear" (and
    /// `+` back again). Placing a bit in one group removes it from the
    /// other. Unknown characters are ignored.
    pub fn parse(flags: &str) -> Self {
        let mut change = Self::default();
        let mut setting = true;
        for c in flags.chars() {
            let bit = match c {
                '+' => {
                    setting = true;
                    continue;
                }
                '-' => {
                    setting = false;
                    continue;
                }
                'r' => FileAttributes::READ_ONLY,
                'h' => FileAttributes::HIDDEN,
                's' => FileAttributes::SYSTEM,
                'a' => FileAttributes::ARCHIVE,
                _ => continue,
            };
            let (target, other) = if setting {
                (&mut change.set, &mut change.clear)
            } else {
                (&mut change.clear, &mut change.set)
            };
            target.insert(bit);
            other.remove(bit);
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_group_is_set() {
        let change = AttributeChange::parse("rh");
        assert_eq!(change.set, FileAttributes::READ_ONLY | FileAttributes::HIDDEN);
        assert!(change.clear.is_empty());
    }

    #[test]
    fn sign_switches_group() {
        let change = AttributeChange::parse("+s-a");
        assert_eq!(change.set.bits(), 0x04);
        assert_eq!(change.clear.bits(), 0x20);
    }

    #[test]
    fn later_mention_wins() {
        let change = AttributeChange::parse("+r-r");
        assert!(change.set.is_empty());
        assert_eq!(change.clear, FileAttributes::READ_ONLY);

        let change = AttributeChange::parse("-h+h");
        assert_eq!(change.set, FileAttributes::HIDDEN);
        assert!(change.clear.is_empty());
    }

    #[test]
    fn unknown_letters_are_ignored() {
        assert_eq!(AttributeChange::parse("xyz"), AttributeChange::default());
    }
}
