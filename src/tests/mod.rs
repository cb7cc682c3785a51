// Test modules for the pet-friends crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.
// HTTP behavior against a mock PetFriends service lives in tests/.
