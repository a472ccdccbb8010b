//! Fixed-capacity arena with first-free allocation.

/// `N` optional slots addressed by index.
///
/// Slots are never vacated: entries live as long as the table does.
#[derive(Clone, Debug)]
pub struct SlotTable<T, const N: usize> {
    slots: [Option<T>; N],
}

impl<T, const N: usize> SlotTable<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Stores `value` in the lowest free slot and returns its index.
    ///
    /// When every slot is taken the value is handed back untouched.
    pub fn allocate(&mut self, value: T) -> Result<usize, T> {
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(value);
                Ok(index)
            }
            None => Err(value),
        }
    }

    /// Stores `value` at `index` if that slot exists and is free.
    pub fn occupy(&mut self, index: usize, value: T) -> Result<(), T> {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(value);
                Ok(())
            }
            _ => Err(value),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Occupied slots in ascending index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl<T, const N: usize> Default for SlotTable<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SlotTable;

    #[test]
    fn allocate_fills_lowest_free_slot_first() {
        let mut table: SlotTable<char, 3> = SlotTable::new();

        assert_eq!(table.allocate('a'), Ok(0));
        assert!(table.occupy(2, 'c').is_ok());
        assert_eq!(table.allocate('b'), Ok(1));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn allocate_on_full_table_returns_value_without_mutation() {
        let mut table: SlotTable<u8, 2> = SlotTable::new();
        table.allocate(10).expect("slot 0");
        table.allocate(11).expect("slot 1");

        assert_eq!(table.allocate(12), Err(12));
        assert_eq!(
            table.occupied().collect::<Vec<_>>(),
            vec![(0, &10), (1, &11)]
        );
    }

    #[test]
    fn occupy_rejects_taken_and_out_of_range_slots() {
        let mut table: SlotTable<&str, 2> = SlotTable::new();

        assert!(table.is_empty());
        assert!(table.occupy(1, "first").is_ok());
        assert_eq!(table.occupy(1, "second"), Err("second"));
        assert_eq!(table.occupy(2, "past-end"), Err("past-end"));
        assert_eq!(table.get(1), Some(&"first"));
        assert!(!table.is_occupied(0));
        assert_eq!(table.capacity(), 2);
    }
}
