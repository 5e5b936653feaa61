use crate::algo::PointInTime;

pub trait SortChronologically {
    /// stable: points sharing a timestamp keep their relative order
    fn sort_chronologically(&mut self);
}

impl<PIT> SortChronologically for [PIT]
where
    PIT: PointInTime,
{
    fn sort_chronologically(&mut self) {
        self.sort_by_key(|pit| pit.timestamp())
    }
}
