pub mod in_memory_pet_repository;
