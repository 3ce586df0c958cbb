/// Altitude stack clustering.
pub mod stacks;
